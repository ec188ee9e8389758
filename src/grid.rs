use std::fmt;

use crate::input::Direction;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub rows: u16,
    pub columns: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.rows) * usize::from(self.columns)
    }
}

/// Grid position in (row, column) cell coordinates.
///
/// Coordinates are signed so that a step off the edge produces a
/// representable position which the bounds check then rejects.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    #[must_use]
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Returns true when the position lies inside the grid.
    #[must_use]
    pub fn is_within_bounds(self, size: GridSize) -> bool {
        self.row >= 0
            && self.column >= 0
            && self.row < i32::from(size.rows)
            && self.column < i32::from(size.columns)
    }

    /// Returns the neighbouring position one step in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (d_row, d_column) = direction.delta();
        Self {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }

    /// Returns true when `other` is exactly one orthogonal step away.
    #[must_use]
    pub fn is_adjacent_to(self, other: Self) -> bool {
        (self.row - other.row).abs() + (self.column - other.column).abs() == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    SnakeBody,
    Food,
}

/// Fixed-size board stored row-major in a flat vector.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.total_cells()],
        }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cell at `position`, or `None` when it lies outside the grid.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.index_of(position).map(|index| self.cells[index])
    }

    /// Overwrites the cell at `position`. Returns false when out of bounds.
    pub fn set(&mut self, position: Position, cell: Cell) -> bool {
        match self.index_of(position) {
            Some(index) => {
                self.cells[index] = cell;
                true
            }
            None => false,
        }
    }

    /// Iterates over every position holding `cell`, row by row.
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, candidate)| **candidate == cell)
            .map(|(index, _)| self.position_at(index))
    }

    /// Counts the cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|candidate| **candidate == cell).count()
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        if !position.is_within_bounds(self.size) {
            return None;
        }

        let row = usize::try_from(position.row).ok()?;
        let column = usize::try_from(position.column).ok()?;
        Some(row * usize::from(self.size.columns) + column)
    }

    fn position_at(&self, index: usize) -> Position {
        let columns = usize::from(self.size.columns);
        // Both quotients fit: rows and columns are u16.
        Position {
            row: (index / columns) as i32,
            column: (index % columns) as i32,
        }
    }
}
