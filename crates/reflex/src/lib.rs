//! Umbrella crate that re-exports the `reflex-*` building blocks.
//!
//! Engines integrate through [`core::GameState`] and drive agents built by
//! [`agents::create_team`]. The [`selfplay`] module pits two teams against each other on the
//! reference arena.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub use reflex_agents as agents;
pub use reflex_arena as arena;
pub use reflex_core as core;
pub use reflex_features as features;
pub use reflex_nav as nav;

pub mod selfplay;

pub use selfplay::{
    run_match, run_series, MatchConfig, MatchError, MatchResult, Outcome, SeriesSummary,
};
