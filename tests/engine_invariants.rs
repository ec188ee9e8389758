use std::collections::HashSet;

use grid_snake::engine::{GameEngine, GameStatus, TickOutcome};
use grid_snake::grid::{Cell, GridSize, Position};
use grid_snake::input::Direction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn assert_invariants(engine: &GameEngine) {
    let segments: Vec<Position> = engine.snake().segments().copied().collect();
    let unique: HashSet<Position> = segments.iter().copied().collect();
    assert!(!segments.is_empty());
    assert_eq!(unique.len(), segments.len(), "duplicate segment in {segments:?}");

    for pair in segments.windows(2) {
        assert!(
            pair[0].is_adjacent_to(pair[1]),
            "segments {} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }

    let body_cells: HashSet<Position> = engine.grid().positions_of(Cell::SnakeBody).collect();
    assert_eq!(body_cells, unique);

    if engine.status() == GameStatus::Running {
        assert_eq!(engine.grid().count(Cell::Food), 1);
        let food = engine.food().expect("running game has food");
        assert_eq!(engine.grid().get(food), Some(Cell::Food));
    }
}

fn play_random_game(size: GridSize, seed: u64) -> GameEngine {
    let mut engine = GameEngine::new_with_seed(size, seed).expect("grid is playable");
    let mut steering = StdRng::seed_from_u64(seed ^ 0x5eed);
    assert_invariants(&engine);

    for _ in 0..2_000 {
        if steering.gen_bool(0.3) {
            let direction = DIRECTIONS[steering.gen_range(0..DIRECTIONS.len())];
            engine.request_direction(direction);
        }

        let length_before = engine.snake().len();
        let outcome = engine.tick();
        assert_invariants(&engine);

        match outcome {
            TickOutcome::Ate => assert_eq!(engine.snake().len(), length_before + 1),
            TickOutcome::Moved => assert_eq!(engine.snake().len(), length_before),
            TickOutcome::OutOfBounds | TickOutcome::SelfCollision => {
                assert_eq!(engine.status(), GameStatus::Over);
            }
        }

        if engine.status() == GameStatus::Over {
            break;
        }
    }

    engine
}

#[test]
fn random_play_preserves_board_invariants() {
    let size = GridSize {
        rows: 8,
        columns: 12,
    };

    for seed in 0..200 {
        play_random_game(size, seed);
    }
}

#[test]
fn random_play_on_tiny_grids_preserves_board_invariants() {
    for (rows, columns) in [(1, 2), (2, 2), (1, 5), (3, 3)] {
        let size = GridSize { rows, columns };
        for seed in 0..100 {
            play_random_game(size, seed);
        }
    }
}

#[test]
fn finished_game_ignores_ticks_and_requests() {
    let size = GridSize {
        rows: 6,
        columns: 6,
    };
    let mut engine = play_random_game(size, 17);
    while engine.status() == GameStatus::Running {
        engine.tick();
    }

    let grid_before = engine.grid().clone();
    let segments_before: Vec<Position> = engine.snake().segments().copied().collect();
    let pending_before = engine.pending_direction();
    let outcome = engine.tick();

    for direction in DIRECTIONS {
        engine.request_direction(direction);
    }
    assert_eq!(engine.tick(), outcome);
    assert_eq!(engine.grid(), &grid_before);
    assert_eq!(
        engine.snake().segments().copied().collect::<Vec<_>>(),
        segments_before
    );
    assert_eq!(engine.pending_direction(), pending_before);
    assert!(engine.changes().is_empty());
}

#[test]
fn seeded_games_are_reproducible() {
    let size = GridSize {
        rows: 10,
        columns: 10,
    };

    let first = play_random_game(size, 99);
    let second = play_random_game(size, 99);

    assert_eq!(first.grid(), second.grid());
    assert_eq!(first.tick_count(), second.tick_count());
    assert_eq!(first.end_reason(), second.end_reason());
}
