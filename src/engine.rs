use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::LayoutError;
use crate::food::spawn_position;
use crate::grid::{Cell, Grid, GridSize, Position};
use crate::input::{direction_change_is_valid, Direction};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over,
}

/// Result of a single simulation step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    Moved,
    Ate,
    OutOfBounds,
    SelfCollision,
}

impl TickOutcome {
    /// Returns true for the outcomes that end the game.
    #[must_use]
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::OutOfBounds | Self::SelfCollision)
    }
}

/// Why a finished game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    OutOfBounds,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFilled,
}

impl EndReason {
    /// The tick outcome that produced this ending.
    #[must_use]
    pub fn outcome(self) -> TickOutcome {
        match self {
            Self::OutOfBounds => TickOutcome::OutOfBounds,
            Self::SelfCollision => TickOutcome::SelfCollision,
            Self::BoardFilled => TickOutcome::Ate,
        }
    }
}

/// One grid write made by the most recent engine operation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CellChange {
    pub position: Position,
    pub cell: Cell,
}

/// Owns the complete state of one game and advances it tick by tick.
///
/// The grid and the snake are kept in lockstep: every snake segment is a
/// `SnakeBody` cell and no other cell is. While the game is running exactly
/// one cell holds food.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    snake: Snake,
    direction: Direction,
    pending_direction: Direction,
    food: Option<Position>,
    end_reason: Option<EndReason>,
    tick_count: u64,
    changes: Vec<CellChange>,
    rng: StdRng,
}

impl GameEngine {
    /// Starts a new game seeded from system entropy.
    pub fn new(size: GridSize) -> Result<Self, LayoutError> {
        ensure_playable(size)?;
        Ok(Self::spawn(size, StdRng::from_entropy()))
    }

    /// Starts a deterministic game for tests and reproducible runs.
    pub fn new_with_seed(size: GridSize, seed: u64) -> Result<Self, LayoutError> {
        ensure_playable(size)?;
        Ok(Self::spawn(size, StdRng::seed_from_u64(seed)))
    }

    /// Builds a running game from an explicit board.
    ///
    /// `segments` are ordered tail first, head last. `direction` becomes both
    /// the committed and the pending direction. The layout is rejected unless
    /// the snake is non-empty, in bounds, free of duplicates and orthogonally
    /// connected, and the food sits on a free in-bounds cell.
    pub fn with_layout(
        size: GridSize,
        segments: Vec<Position>,
        direction: Direction,
        food: Position,
        seed: u64,
    ) -> Result<Self, LayoutError> {
        ensure_playable(size)?;

        for pair in segments.windows(2) {
            if !pair[0].is_adjacent_to(pair[1]) {
                return Err(LayoutError::DisconnectedSegments(pair[0], pair[1]));
            }
        }

        let mut grid = Grid::new(size);
        let mut changes = Vec::with_capacity(segments.len() + 1);
        for &segment in &segments {
            match grid.get(segment) {
                None => return Err(LayoutError::SegmentOutOfBounds(segment)),
                Some(Cell::SnakeBody) => return Err(LayoutError::DuplicateSegment(segment)),
                Some(_) => {}
            }
            grid.set(segment, Cell::SnakeBody);
            changes.push(CellChange {
                position: segment,
                cell: Cell::SnakeBody,
            });
        }

        match grid.get(food) {
            None => return Err(LayoutError::FoodOutOfBounds(food)),
            Some(Cell::SnakeBody) => return Err(LayoutError::FoodOnSnake(food)),
            Some(_) => {}
        }
        grid.set(food, Cell::Food);
        changes.push(CellChange {
            position: food,
            cell: Cell::Food,
        });

        let snake = Snake::from_segments(segments).ok_or(LayoutError::EmptySnake)?;

        Ok(Self {
            grid,
            snake,
            direction,
            pending_direction: direction,
            food: Some(food),
            end_reason: None,
            tick_count: 0,
            changes,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn spawn(size: GridSize, mut rng: StdRng) -> Self {
        let start = Position {
            row: rng.gen_range(0..i32::from(size.rows)),
            column: rng.gen_range(0..i32::from(size.columns)),
        };
        let direction = initial_direction(start, size);

        let mut engine = Self {
            grid: Grid::new(size),
            snake: Snake::new(start),
            direction,
            pending_direction: direction,
            food: None,
            end_reason: None,
            tick_count: 0,
            changes: Vec::new(),
            rng,
        };
        engine.write(start, Cell::SnakeBody);
        engine.place_food();

        log::info!(
            "new game on {}x{} grid: snake at {start} heading {direction:?}",
            size.rows,
            size.columns
        );
        engine
    }

    /// Records `direction` for the next tick.
    ///
    /// Ignored once the game is over, and ignored when it would reverse a
    /// snake longer than one segment onto itself. The latest accepted request
    /// before a tick wins.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.status() != GameStatus::Running {
            return;
        }

        if self.snake.len() > 1 && !direction_change_is_valid(self.direction, direction) {
            return;
        }

        self.pending_direction = direction;
    }

    /// Advances simulation by one step.
    ///
    /// On a finished game this is a no-op returning the outcome that ended it.
    pub fn tick(&mut self) -> TickOutcome {
        self.changes.clear();

        if let Some(reason) = self.end_reason {
            return reason.outcome();
        }

        self.tick_count += 1;
        self.direction = self.pending_direction;
        let candidate = self.snake.head().stepped(self.direction);

        match self.grid.get(candidate) {
            None => self.finish(EndReason::OutOfBounds),
            Some(Cell::SnakeBody) => self.finish(EndReason::SelfCollision),
            Some(Cell::Food) => {
                self.write(candidate, Cell::SnakeBody);
                self.snake.push_head(candidate);
                self.food = None;
                self.place_food();
                TickOutcome::Ate
            }
            Some(Cell::Empty) => {
                self.write(candidate, Cell::SnakeBody);
                self.snake.push_head(candidate);
                if let Some(tail) = self.snake.pop_tail() {
                    self.write(tail, Cell::Empty);
                }
                TickOutcome::Moved
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.end_reason.is_some() {
            GameStatus::Over
        } else {
            GameStatus::Running
        }
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Direction committed by the most recent tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next tick will commit.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Current food cell; `None` only after the board filled up.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Cells written by the most recent operation, in write order.
    ///
    /// After construction this lists the initial snake and food; after a tick
    /// it lists the new head, any vacated tail and any respawned food.
    #[must_use]
    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }

    fn place_food(&mut self) {
        match spawn_position(&mut self.rng, &self.grid) {
            Some(position) => {
                self.write(position, Cell::Food);
                self.food = Some(position);
            }
            None => {
                log::debug!("no free cell left for food");
                self.end_reason = Some(EndReason::BoardFilled);
            }
        }
    }

    fn finish(&mut self, reason: EndReason) -> TickOutcome {
        log::debug!(
            "game over after {} ticks: {reason:?} (length {})",
            self.tick_count,
            self.snake.len()
        );
        self.end_reason = Some(reason);
        reason.outcome()
    }

    fn write(&mut self, position: Position, cell: Cell) {
        if self.grid.set(position, cell) {
            self.changes.push(CellChange { position, cell });
        }
    }
}

/// Heads away from the nearer vertical edge.
fn initial_direction(start: Position, size: GridSize) -> Direction {
    if 2 * start.column >= i32::from(size.columns) {
        Direction::Left
    } else {
        Direction::Right
    }
}

fn ensure_playable(size: GridSize) -> Result<(), LayoutError> {
    if size.total_cells() < 2 {
        return Err(LayoutError::GridTooSmall {
            rows: size.rows,
            columns: size.columns,
        });
    }
    Ok(())
}
