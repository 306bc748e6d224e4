use crate::{Action, AgentIndex, GameState, ReflexError};

/// Engine-facing agent contract: one registration call, then one decision per turn.
pub trait CaptureAgent<S>
where
    S: GameState,
{
    fn index(&self) -> AgentIndex;

    /// Record start position and resource baseline from the opening state.
    fn register_initial_state(&mut self, state: &S) -> Result<(), ReflexError>;

    /// Pick one of `state.legal_actions(self.index())`.
    fn choose_action(&mut self, state: &S) -> Result<Action, ReflexError>;
}
