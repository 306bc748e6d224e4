use core::fmt;
use core::str::FromStr;

use reflex_core::{AgentIndex, GameState, ReflexError};
use reflex_features::{
    Baseline, FeatureExtractor, Forager, Sentinel, Weights, BASELINE_WEIGHTS, FORAGER_WEIGHTS,
    SENTINEL_WEIGHTS,
};

use crate::{ReflexAgent, TeamConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    Forager,
    Sentinel,
    Baseline,
}

/// Name lookup for roles selected by configuration.
pub const ROLE_TABLE: [(&str, Role); 3] = [
    ("forager", Role::Forager),
    ("sentinel", Role::Sentinel),
    ("baseline", Role::Baseline),
];

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Role::Forager => "forager",
            Role::Sentinel => "sentinel",
            Role::Baseline => "baseline",
        }
    }

    pub fn default_weights(self) -> Weights {
        match self {
            Role::Forager => FORAGER_WEIGHTS,
            Role::Sentinel => SENTINEL_WEIGHTS,
            Role::Baseline => BASELINE_WEIGHTS,
        }
    }

    /// Whether the role switches to the Returning override when its thresholds trip.
    pub fn returns_home(self) -> bool {
        matches!(self, Role::Forager)
    }

    pub fn extractor<S: GameState>(self) -> Box<dyn FeatureExtractor<S>> {
        match self {
            Role::Forager => Box::new(Forager),
            Role::Sentinel => Box::new(Sentinel),
            Role::Baseline => Box::new(Baseline),
        }
    }
}

impl FromStr for Role {
    type Err = ReflexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ROLE_TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(_, role)| *role)
            .ok_or_else(|| ReflexError::UnknownRole {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Two agents playing for the same side.
pub struct Team<S>
where
    S: GameState,
{
    is_red: bool,
    agents: [ReflexAgent<S>; 2],
}

impl<S> Team<S>
where
    S: GameState,
{
    pub fn is_red(&self) -> bool {
        self.is_red
    }

    pub fn agents(&self) -> &[ReflexAgent<S>; 2] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [ReflexAgent<S>; 2] {
        &mut self.agents
    }

    pub fn into_agents(self) -> [ReflexAgent<S>; 2] {
        self.agents
    }
}

/// Build a team from the role names in `config`.
pub fn create_team<S: GameState>(
    first: AgentIndex,
    second: AgentIndex,
    is_red: bool,
    config: &TeamConfig,
) -> Result<Team<S>, ReflexError> {
    let first_role: Role = config.first.parse()?;
    let second_role: Role = config.second.parse()?;
    tracing::info!(
        is_red,
        first = %first,
        first_role = %first_role,
        second = %second,
        second_role = %second_role,
        "created team"
    );
    Ok(Team {
        is_red,
        agents: [
            ReflexAgent::new(first, first_role, &config.agent),
            ReflexAgent::new(second, second_role, &config.agent),
        ],
    })
}
