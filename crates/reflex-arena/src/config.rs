#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Manhattan radius within which a team sees opponents.
    pub sight_range: u32,
    /// Scared ticks granted to defenders when a capsule is eaten.
    pub scared_time: u32,
    /// Noisy distance readings are off by at most this much.
    pub noise_radius: u32,
    /// Move half a cell per application instead of a whole cell.
    pub half_steps: bool,
    /// Total agent moves before the game is called.
    pub max_moves: u32,
    /// The game ends once a team has delivered all but this many of the opposing food.
    pub min_food: usize,
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            sight_range: 5,
            scared_time: 40,
            noise_radius: 6,
            half_steps: false,
            max_moves: 1200,
            min_food: 2,
            seed: 0,
        }
    }
}
