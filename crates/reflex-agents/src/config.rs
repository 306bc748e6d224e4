use reflex_features::Weights;

use crate::ModeThresholds;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-agent tuning shared by both members of a team.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Seed for tie-break draws; each agent derives its own stream from it.
    pub seed: u64,
    pub thresholds: ModeThresholds,
    /// Force the Returning override on or off. `None` keeps the role's default.
    pub return_home: Option<bool>,
    /// Replace the role's default weights.
    pub weights: Option<Weights>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TeamConfig {
    /// Role name of the team's first (lower-index) agent.
    pub first: String,
    pub second: String,
    pub agent: AgentConfig,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            first: "forager".to_string(),
            second: "sentinel".to_string(),
            agent: AgentConfig::default(),
        }
    }
}

#[cfg(feature = "serde")]
mod load {
    use std::path::{Path, PathBuf};

    use reflex_core::ReflexError;
    use thiserror::Error;

    use super::TeamConfig;
    use crate::Role;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to read team config from {path}")]
        Io {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        #[error("failed to parse team config")]
        Yaml(#[from] serde_yaml::Error),
        #[error(transparent)]
        Reflex(#[from] ReflexError),
    }

    impl TeamConfig {
        /// Parse a YAML team description. Role names are checked here so that a bad file fails
        /// before any agent is built.
        pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
            let config: Self = serde_yaml::from_str(text)?;
            config.first.parse::<Role>()?;
            config.second.parse::<Role>()?;
            Ok(config)
        }

        pub fn load(path: &Path) -> Result<Self, ConfigError> {
            let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_yaml_str(&text)
        }
    }
}

#[cfg(feature = "serde")]
pub use load::ConfigError;
