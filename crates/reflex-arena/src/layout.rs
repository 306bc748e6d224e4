use std::collections::BTreeSet;

use reflex_core::Cell;
use reflex_nav::Maze;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {tile:?} at row {row}, column {col}")]
    UnknownTile { tile: char, row: usize, col: usize },
    #[error("layout width {width} cannot be split into two halves")]
    OddWidth { width: usize },
    #[error("agent start {slot} appears more than once")]
    DuplicateAgent { slot: usize },
    #[error("agent start {slot} is missing (starts must be numbered 1..n)")]
    MissingAgent { slot: usize },
}

/// Parsed capture map.
///
/// Text format, one row per line, top row first:
/// - `%` wall
/// - `.` food
/// - `o` power capsule
/// - `1`..`9` agent start (slot = digit - 1; odd digits start red, even digits blue)
/// - space: open floor
///
/// Columns left of `width / 2` are red home territory, the rest blue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    maze: Maze,
    food: BTreeSet<Cell>,
    capsules: BTreeSet<Cell>,
    starts: Vec<Cell>,
}

const DEFAULT_CAPTURE: &str = include_str!("../layouts/default_capture.lay");

impl Layout {
    /// The built-in 20x9 symmetric four-agent map.
    pub fn default_capture() -> Result<Self, LayoutError> {
        Self::parse(DEFAULT_CAPTURE)
    }

    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(LayoutError::Empty);
        };

        let width = first.chars().count();
        if width % 2 != 0 {
            return Err(LayoutError::OddWidth { width });
        }
        let height = rows.len();

        let mut maze = Maze::new(width as u32, height as u32);
        let mut food = BTreeSet::new();
        let mut capsules = BTreeSet::new();
        let mut starts: Vec<Option<Cell>> = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }

            // Text rows run top-down, grid y runs bottom-up.
            let y = (height - 1 - row) as i32;
            for (col, tile) in line.chars().enumerate() {
                let cell = Cell::new(col as i32, y);
                match tile {
                    '%' => maze.set_wall(cell, true),
                    '.' => {
                        food.insert(cell);
                    }
                    'o' => {
                        capsules.insert(cell);
                    }
                    ' ' => {}
                    '1'..='9' => {
                        let slot = tile as usize - '1' as usize;
                        if starts.len() <= slot {
                            starts.resize(slot + 1, None);
                        }
                        if starts[slot].replace(cell).is_some() {
                            return Err(LayoutError::DuplicateAgent { slot: slot + 1 });
                        }
                    }
                    _ => return Err(LayoutError::UnknownTile { tile, row, col }),
                }
            }
        }

        let starts = starts
            .into_iter()
            .enumerate()
            .map(|(slot, cell)| cell.ok_or(LayoutError::MissingAgent { slot: slot + 1 }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            maze,
            food,
            capsules,
            starts,
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn food(&self) -> &BTreeSet<Cell> {
        &self.food
    }

    pub fn capsules(&self) -> &BTreeSet<Cell> {
        &self.capsules
    }

    pub fn starts(&self) -> &[Cell] {
        &self.starts
    }

    pub fn num_agents(&self) -> usize {
        self.starts.len()
    }

    pub fn width(&self) -> u32 {
        self.maze.width()
    }

    pub fn height(&self) -> u32 {
        self.maze.height()
    }

    pub fn is_red_side(&self, cell: Cell) -> bool {
        cell.x < (self.maze.width() / 2) as i32
    }
}
