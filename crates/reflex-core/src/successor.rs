use crate::{Action, AgentIndex, GameState};

/// Hypothetical state after `agent` plays `action`.
///
/// Engines may advance an agent by half a cell per tick; when the first application leaves the
/// agent between cells the same action is applied once more so scoring always sees a whole move.
pub fn successor<S: GameState>(state: &S, agent: AgentIndex, action: Action) -> S {
    let next = state.generate_successor(agent, action);
    match next.agent_position(agent) {
        Some(pos) if !pos.is_aligned() => next.generate_successor(agent, action),
        _ => next,
    }
}
