use crate::{Action, AgentIndex, AgentObservation, Cell, Position};

/// Shortest-path oracle over the static map.
///
/// Backends report a large finite distance for disconnected cells rather than failing.
pub trait MazeDistance {
    fn maze_distance(&self, a: Cell, b: Cell) -> u32;
}

/// Read-only view of an engine state, as seen by one team.
///
/// Queries whose answer depends on team membership take the perspective agent. Implementations
/// are values: `generate_successor` returns a new state and never mutates `self`.
pub trait GameState: Sized {
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Action>;

    /// Apply `action` for `agent` once. `action` must be legal; engines need not re-validate.
    fn generate_successor(&self, agent: AgentIndex, action: Action) -> Self;

    fn agent_state(&self, agent: AgentIndex) -> AgentObservation;

    fn agent_position(&self, agent: AgentIndex) -> Option<Position> {
        self.agent_state(agent).position
    }

    /// Score from the perspective of `agent`'s team (positive = winning).
    fn score(&self, agent: AgentIndex) -> f64;

    /// Opposing agents in slot order.
    fn opponents(&self, agent: AgentIndex) -> Vec<AgentIndex>;

    /// Resources `agent` can collect (on the opposing half).
    fn collectible_resources(&self, agent: AgentIndex) -> Vec<Cell>;

    /// Resources `agent`'s team defends (on the home half).
    fn defended_resources(&self, agent: AgentIndex) -> Vec<Cell>;

    /// One noisy distance estimate per opponent, measured from `agent`.
    fn noisy_opponent_distances(&self, agent: AgentIndex) -> Vec<f64>;

    fn distancer(&self) -> &dyn MazeDistance;
}
