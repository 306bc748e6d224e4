use std::collections::VecDeque;

use reflex_core::{Cell, MazeDistance};

use crate::Maze;

/// Distance reported for walls, out-of-bounds cells and disconnected pairs.
pub const UNREACHABLE: u32 = 100_000;

/// All-pairs shortest path table, built once per maze with one BFS per open cell.
///
/// Queries are a table lookup, so scoring every legal action each turn stays cheap.
#[derive(Debug, Clone)]
pub struct MazeDistancer {
    maze: Maze,
    table: Vec<u32>,
}

impl MazeDistancer {
    pub fn new(maze: Maze) -> Self {
        let n = maze.cell_count();
        let mut table = vec![UNREACHABLE; n * n];
        let mut queue = VecDeque::new();

        for source in maze.open_cells() {
            let Some(src_idx) = maze.idx(source) else {
                continue;
            };
            let row = &mut table[src_idx * n..(src_idx + 1) * n];
            row[src_idx] = 0;
            queue.clear();
            queue.push_back(source);

            while let Some(cell) = queue.pop_front() {
                let Some(cell_idx) = maze.idx(cell) else {
                    continue;
                };
                let next = row[cell_idx] + 1;
                for n_cell in maze.neighbors(cell) {
                    let Some(n_idx) = maze.idx(n_cell) else {
                        continue;
                    };
                    if row[n_idx] != UNREACHABLE {
                        continue;
                    }
                    row[n_idx] = next;
                    queue.push_back(n_cell);
                }
            }
        }

        Self { maze, table }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn distance(&self, a: Cell, b: Cell) -> u32 {
        if self.maze.is_wall(a) || self.maze.is_wall(b) {
            return UNREACHABLE;
        }
        match (self.maze.idx(a), self.maze.idx(b)) {
            (Some(ia), Some(ib)) => self.table[ia * self.maze.cell_count() + ib],
            _ => UNREACHABLE,
        }
    }
}

impl MazeDistance for MazeDistancer {
    fn maze_distance(&self, a: Cell, b: Cell) -> u32 {
        self.distance(a, b)
    }
}
