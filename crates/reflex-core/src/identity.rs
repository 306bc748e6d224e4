use crate::{AgentIndex, Cell, GameState, ReflexError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-agent reference points fixed when the game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentIdentity {
    pub index: AgentIndex,
    pub start: Cell,
    /// Number of collectible resources on the board at registration.
    pub initial_resources: usize,
}

impl AgentIdentity {
    pub fn capture<S: GameState>(state: &S, index: AgentIndex) -> Result<Self, ReflexError> {
        let start = state
            .agent_position(index)
            .ok_or(ReflexError::MissingPosition { agent: index })?
            .nearest_cell();
        Ok(Self {
            index,
            start,
            initial_resources: state.collectible_resources(index).len(),
        })
    }
}
