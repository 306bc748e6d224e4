use core::fmt::{self, Debug};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier for an agent.
///
/// Deterministic play requires:
/// - stable ordering (`Ord`)
/// - a stable numeric ID (`stable_id`) for seeding and logs
pub trait AgentId: Copy + Ord + Eq + Debug {
    fn stable_id(self) -> u64;
}

/// Engine-assigned agent slot.
///
/// Capture engines alternate teams by slot: even slots play red, odd slots play blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentIndex(pub usize);

impl AgentIndex {
    pub fn is_red(self) -> bool {
        self.0 % 2 == 0
    }

    pub fn is_teammate(self, other: AgentIndex) -> bool {
        self.is_red() == other.is_red()
    }
}

impl AgentId for AgentIndex {
    fn stable_id(self) -> u64 {
        self.0 as u64
    }
}

impl fmt::Display for AgentIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}
