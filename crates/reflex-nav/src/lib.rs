//! Grid maze and the precomputed maze-distance oracle used by capture engines.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod distancer;
pub mod maze;

pub use distancer::{MazeDistancer, UNREACHABLE};
pub use maze::Maze;
