use reflex_core::AgentObservation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Behavioral mode, recomputed every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    #[default]
    Foraging,
    Returning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModeThresholds {
    /// Head home once this many resources are being carried.
    pub carrying_limit: u32,
    /// Head home once delivered resources come within this many of the opening count.
    pub returned_margin: usize,
}

impl Default for ModeThresholds {
    fn default() -> Self {
        Self {
            carrying_limit: 4,
            returned_margin: 2,
        }
    }
}

impl ModeThresholds {
    pub fn classify(&self, observation: &AgentObservation, initial_resources: usize) -> Mode {
        let enough_returned = observation.num_returned as usize
            >= initial_resources.saturating_sub(self.returned_margin);
        let full = observation.num_carrying >= self.carrying_limit;
        if enough_returned || full {
            Mode::Returning
        } else {
            Mode::Foraging
        }
    }
}
