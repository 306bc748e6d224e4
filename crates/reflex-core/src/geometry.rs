use crate::Action;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discrete grid location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, action: Action) -> Cell {
        let (dx, dy) = action.vector();
        Cell::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Continuous agent position. Engines may leave an agent between two cells mid-move.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round half-up to the closest cell.
    pub fn nearest_cell(self) -> Cell {
        Cell::new((self.x + 0.5).floor() as i32, (self.y + 0.5).floor() as i32)
    }

    pub fn is_aligned(self) -> bool {
        self == Position::from(self.nearest_cell())
    }

    pub fn advance(self, action: Action, speed: f64) -> Position {
        let (dx, dy) = action.vector();
        Position::new(self.x + dx as f64 * speed, self.y + dy as f64 * speed)
    }

    pub fn manhattan(self, other: Position) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl From<Cell> for Position {
    fn from(cell: Cell) -> Self {
        Position::new(cell.x as f64, cell.y as f64)
    }
}
