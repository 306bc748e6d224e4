use crate::{Action, Cell, Position};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the engine reports about one agent in a given state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentObservation {
    /// `None` when the agent is outside the observer's sensor range.
    pub position: Option<Position>,
    /// Heading of the last non-`Stop` move.
    pub facing: Action,
    /// True while the agent stands on the opposing team's home territory.
    pub intruding: bool,
    /// Ticks left during which this agent cannot capture intruders.
    pub scared_timer: u32,
    pub num_carrying: u32,
    pub num_returned: u32,
}

impl AgentObservation {
    pub fn cell(&self) -> Option<Cell> {
        self.position.map(Position::nearest_cell)
    }

    /// An observed defender that can still capture: on home ground and not (or barely) scared.
    pub fn is_dangerous_defender(&self, scared_threshold: u32) -> bool {
        self.position.is_some() && !self.intruding && self.scared_timer < scared_threshold
    }

    pub fn is_visible_intruder(&self) -> bool {
        self.position.is_some() && self.intruding
    }
}

impl Default for AgentObservation {
    fn default() -> Self {
        Self {
            position: None,
            facing: Action::Stop,
            intruding: false,
            scared_timer: 0,
            num_carrying: 0,
            num_returned: 0,
        }
    }
}
