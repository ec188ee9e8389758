use rand::Rng;

use crate::grid::{Cell, Grid, Position};

/// Random draws attempted before falling back to a full scan of empty cells.
pub const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// Picks a uniformly random empty cell, or `None` when the grid is full.
///
/// Draws random cells until one is empty. After `MAX_SAMPLE_ATTEMPTS` misses,
/// which only becomes likely on a nearly full board, it collects every empty
/// cell and picks among those instead.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, grid: &Grid) -> Option<Position> {
    let size = grid.size();
    if size.total_cells() == 0 {
        return None;
    }

    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let candidate = Position {
            row: rng.gen_range(0..i32::from(size.rows)),
            column: rng.gen_range(0..i32::from(size.columns)),
        };
        if grid.get(candidate) == Some(Cell::Empty) {
            return Some(candidate);
        }
    }

    scan_position(rng, grid)
}

fn scan_position<R: Rng + ?Sized>(rng: &mut R, grid: &Grid) -> Option<Position> {
    let candidates: Vec<Position> = grid.positions_of(Cell::Empty).collect();
    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::grid::{Cell, Grid, GridSize, Position};

    use super::{scan_position, spawn_position};

    fn filled_except(size: GridSize, free: &[Position]) -> Grid {
        let mut grid = Grid::new(size);
        for row in 0..i32::from(size.rows) {
            for column in 0..i32::from(size.columns) {
                let position = Position::new(row, column);
                if !free.contains(&position) {
                    grid.set(position, Cell::SnakeBody);
                }
            }
        }
        grid
    }

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(GridSize {
            rows: 6,
            columns: 8,
        });
        for column in 0..3 {
            grid.set(Position::new(0, column), Cell::SnakeBody);
        }

        for _ in 0..100 {
            let position =
                spawn_position(&mut rng, &grid).expect("grid has free cells");
            assert_eq!(grid.get(position), Some(Cell::Empty));
        }
    }

    #[test]
    fn nearly_full_grid_still_finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let size = GridSize {
            rows: 30,
            columns: 30,
        };
        let free = Position::new(17, 4);
        let grid = filled_except(size, &[free]);

        for _ in 0..10 {
            assert_eq!(spawn_position(&mut rng, &grid), Some(free));
        }
    }

    #[test]
    fn full_grid_yields_none() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = filled_except(
            GridSize {
                rows: 2,
                columns: 2,
            },
            &[],
        );

        assert_eq!(spawn_position(&mut rng, &grid), None);
        assert_eq!(scan_position(&mut rng, &grid), None);
    }

    #[test]
    fn scan_only_picks_empty_cells() {
        let mut rng = StdRng::seed_from_u64(5);
        let size = GridSize {
            rows: 4,
            columns: 4,
        };
        let free = [Position::new(0, 0), Position::new(3, 3)];
        let grid = filled_except(size, &free);

        for _ in 0..20 {
            let position = scan_position(&mut rng, &grid).expect("two free cells remain");
            assert!(free.contains(&position));
        }
    }
}
