use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::grid::Position;

/// Reasons an explicit board layout cannot be turned into a running game.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum LayoutError {
    #[error("grid must have at least 2 cells, got {rows}x{columns}")]
    GridTooSmall { rows: u16, columns: u16 },
    #[error("snake must have at least one segment")]
    EmptySnake,
    #[error("snake segment {0} lies outside the grid")]
    SegmentOutOfBounds(Position),
    #[error("snake segment {0} appears more than once")]
    DuplicateSegment(Position),
    #[error("snake segments {0} and {1} are not adjacent")]
    DisconnectedSegments(Position, Position),
    #[error("food {0} lies outside the grid")]
    FoodOutOfBounds(Position),
    #[error("food {0} overlaps the snake")]
    FoodOnSnake(Position),
}

/// Failures while loading or validating game settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("grid dimensions {rows}x{columns} leave no room for a snake and food")]
    InvalidDimensions { rows: u16, columns: u16 },
    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,
}

/// Top-level error returned by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
