use thiserror::Error;

use crate::AgentIndex;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflexError {
    #[error("unknown agent role: {name:?}")]
    UnknownRole { name: String },
    #[error("{agent} chose an action before register_initial_state")]
    NotRegistered { agent: AgentIndex },
    #[error("engine offered no legal actions to {agent}")]
    NoLegalActions { agent: AgentIndex },
    #[error("{agent} has no observable position")]
    MissingPosition { agent: AgentIndex },
}
