//! Reflex capture agents.
//!
//! Each turn a [`ReflexAgent`] scores every legal move one ply ahead, then either picks greedily
//! (random tie-break) or, once its [`Mode`] flips to Returning, heads back to its start cell while
//! steering clear of defenders.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod mode;
pub mod selector;
pub mod team;

#[cfg(feature = "serde")]
pub use config::ConfigError;
pub use config::{AgentConfig, TeamConfig};
pub use mode::{Mode, ModeThresholds};
pub use selector::{ReflexAgent, RETURNING_WEIGHTS};
pub use team::{create_team, Role, Team, ROLE_TABLE};
