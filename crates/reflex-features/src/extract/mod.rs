pub mod contrib;
mod roles;

pub use roles::{Baseline, Forager, Sentinel};

use reflex_core::{Action, AgentIdentity, GameState};

use crate::FeatureVector;

/// Maps a hypothetical move to the features a role scores it by.
///
/// Implementations are stateless: every call derives its own successor and builds a fresh
/// vector.
pub trait FeatureExtractor<S>
where
    S: GameState,
{
    fn extract(&self, identity: &AgentIdentity, state: &S, action: Action) -> FeatureVector;
}
