use reflex_core::rng::derive_seed;
use reflex_core::{
    successor, Action, AgentId, AgentIdentity, AgentIndex, CaptureAgent, DeterministicRng,
    GameState, ReflexError, SplitMix64,
};
use reflex_features::extract::contrib::ghost_avoidance;
use reflex_features::{evaluate, Feature, FeatureExtractor, Weights};

use crate::{AgentConfig, Mode, ModeThresholds, Role};

/// RNG stream reserved for tie-break draws.
const TIE_BREAK_STREAM: u64 = 0x7469_6562;

/// Scores the Returning override by ghost pressure; distance home is subtracted separately.
pub const RETURNING_WEIGHTS: Weights = Weights::ZERO
    .with(Feature::GhostDistance, -13.0)
    .with(Feature::NumGhosts, -1000.0);

/// One-ply reflex agent: scores every legal move with a role's features and weights, then picks
/// greedily with a random tie-break, or heads home when its mode says so.
pub struct ReflexAgent<S>
where
    S: GameState,
{
    index: AgentIndex,
    role: Role,
    extractor: Box<dyn FeatureExtractor<S>>,
    weights: Weights,
    thresholds: ModeThresholds,
    return_home: bool,
    rng: SplitMix64,
    identity: Option<AgentIdentity>,
    mode: Mode,
}

impl<S> ReflexAgent<S>
where
    S: GameState,
{
    pub fn new(index: AgentIndex, role: Role, config: &AgentConfig) -> Self {
        Self {
            index,
            role,
            extractor: role.extractor(),
            weights: config.weights.unwrap_or_else(|| role.default_weights()),
            thresholds: config.thresholds,
            return_home: config.return_home.unwrap_or_else(|| role.returns_home()),
            rng: SplitMix64::new(derive_seed(config.seed, index.stable_id(), TIE_BREAK_STREAM)),
            identity: None,
            mode: Mode::Foraging,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// `None` until `register_initial_state` succeeds.
    pub fn identity(&self) -> Option<&AgentIdentity> {
        self.identity.as_ref()
    }

    /// Mode computed on the most recent `choose_action` call.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Linear score of one hypothetical move.
    pub fn score(&self, identity: &AgentIdentity, state: &S, action: Action) -> f64 {
        let value = evaluate(&self.extractor.extract(identity, state, action), &self.weights);
        if value.is_nan() {
            f64::NEG_INFINITY
        } else {
            value
        }
    }

    fn best_actions(&self, identity: &AgentIdentity, state: &S, legal: &[Action]) -> Vec<Action> {
        let scored: Vec<(Action, f64)> = legal
            .iter()
            .map(|&action| (action, self.score(identity, state, action)))
            .collect();
        for (action, value) in &scored {
            tracing::trace!(agent = %self.index, %action, value, "scored action");
        }

        let best = scored
            .iter()
            .map(|(_, v)| *v)
            .fold(f64::NEG_INFINITY, f64::max);
        scored
            .into_iter()
            .filter(|(_, v)| *v == best)
            .map(|(a, _)| a)
            .collect()
    }

    /// Ghost pressure plus maze distance to the start cell; the first strict maximizer wins.
    fn head_home(&self, identity: &AgentIdentity, state: &S, legal: &[Action]) -> Action {
        let mut best_action = legal[0];
        let mut best_value = f64::NEG_INFINITY;
        for &action in legal {
            let next = successor(state, self.index, action);
            let Some(cell) = next.agent_position(self.index).map(|p| p.nearest_cell()) else {
                continue;
            };
            let home = next.distancer().maze_distance(cell, identity.start) as f64;
            let value = evaluate(&ghost_avoidance(identity, &next), &RETURNING_WEIGHTS) - home;
            if value > best_value {
                best_value = value;
                best_action = action;
            }
        }
        best_action
    }
}

impl<S> CaptureAgent<S> for ReflexAgent<S>
where
    S: GameState,
{
    fn index(&self) -> AgentIndex {
        self.index
    }

    fn register_initial_state(&mut self, state: &S) -> Result<(), ReflexError> {
        let identity = AgentIdentity::capture(state, self.index)?;
        tracing::info!(
            agent = %self.index,
            role = %self.role,
            start_x = identity.start.x,
            start_y = identity.start.y,
            resources = identity.initial_resources,
            "registered agent"
        );
        self.identity = Some(identity);
        self.mode = Mode::Foraging;
        Ok(())
    }

    fn choose_action(&mut self, state: &S) -> Result<Action, ReflexError> {
        let identity = self
            .identity
            .ok_or(ReflexError::NotRegistered { agent: self.index })?;
        let legal = state.legal_actions(self.index);
        if legal.is_empty() {
            return Err(ReflexError::NoLegalActions { agent: self.index });
        }

        let best = self.best_actions(&identity, state, &legal);

        self.mode = if self.return_home {
            self.thresholds
                .classify(&state.agent_state(self.index), identity.initial_resources)
        } else {
            Mode::Foraging
        };

        let action = match self.mode {
            Mode::Returning => self.head_home(&identity, state, &legal),
            Mode::Foraging => best[self.rng.next_index(best.len())],
        };
        tracing::debug!(
            agent = %self.index,
            mode = ?self.mode,
            %action,
            ties = best.len(),
            "chose action"
        );
        Ok(action)
    }
}
