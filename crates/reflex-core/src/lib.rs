//! Engine-agnostic types and the game-state contract for reflex capture agents.
//!
//! The engine owns the state representation and transition function; this crate only describes
//! what the decision core needs to ask of it (`GameState`, `MazeDistance`) and the small value
//! types that flow across that boundary.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod agent;
pub mod error;
pub mod geometry;
pub mod identity;
pub mod observation;
pub mod policy;
pub mod rng;
pub mod successor;
pub mod world;

pub use action::Action;
pub use agent::{AgentId, AgentIndex};
pub use error::ReflexError;
pub use geometry::{Cell, Position};
pub use identity::AgentIdentity;
pub use observation::AgentObservation;
pub use policy::CaptureAgent;
pub use rng::{DeterministicRng, SplitMix64};
pub use successor::successor;
pub use world::{GameState, MazeDistance};
