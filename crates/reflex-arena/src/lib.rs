//! Reference capture engine.
//!
//! A small, deterministic implementation of the `reflex-core` game-state contract: two teams on a
//! split grid, food to carry home, capsules that scare defenders, limited sight and noisy distance
//! readings. It exists so agents can be exercised end-to-end without an external engine.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod layout;
pub mod state;

pub use config::ArenaConfig;
pub use layout::{Layout, LayoutError};
pub use state::ArenaState;
