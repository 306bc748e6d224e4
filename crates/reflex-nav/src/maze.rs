use reflex_core::{Action, Cell};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Static wall layout. `(0, 0)` is the bottom-left corner; north is `+y`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Maze {
    width: i32,
    height: i32,
    walls: Vec<bool>,
}

impl Maze {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "maze must be non-empty");
        let width = width as i32;
        let height = height as i32;
        Self {
            width,
            height,
            walls: vec![false; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    pub fn set_wall(&mut self, cell: Cell, wall: bool) {
        if let Some(idx) = self.idx(cell) {
            self.walls[idx] = wall;
        }
    }

    /// Out-of-bounds cells count as walls.
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.idx(cell).map(|idx| self.walls[idx]).unwrap_or(true)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    pub(crate) fn idx(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((cell.y * self.width + cell.x) as usize)
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.walls.len()
    }

    /// Moves from `cell` that do not run into a wall, in `Action::ALL` order, `Stop` last.
    pub fn open_moves(&self, cell: Cell) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|&a| a == Action::Stop || !self.is_wall(cell.step(a)))
            .collect()
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .map(move |x| Cell::new(x, y))
                .filter(move |&c| !self.is_wall(c))
        })
    }

    pub(crate) fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        // Fixed order for determinism: N, E, S, W.
        [Action::North, Action::East, Action::South, Action::West]
            .into_iter()
            .map(move |a| cell.step(a))
            .filter(move |&n| !self.is_wall(n))
    }
}
