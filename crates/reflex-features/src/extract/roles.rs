use reflex_core::{successor, Action, AgentIdentity, GameState};

use super::contrib::{
    distance_to_start, food_progress, ghost_avoidance, intercept_invaders, movement_quality,
    patrol_defended_food, stay_on_defense, successor_score,
};
use super::FeatureExtractor;
use crate::FeatureVector;

/// Offense: eat opposing food while keeping clear of defenders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Forager;

impl<S: GameState> FeatureExtractor<S> for Forager {
    fn extract(&self, identity: &AgentIdentity, state: &S, action: Action) -> FeatureVector {
        let next = successor(state, identity.index, action);
        ghost_avoidance(identity, &next)
            .merge(food_progress(identity, &next))
            .merge(movement_quality(identity, state, action))
    }
}

/// Defense: hold home ground, close on intruders, patrol the guarded food.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sentinel;

impl<S: GameState> FeatureExtractor<S> for Sentinel {
    fn extract(&self, identity: &AgentIdentity, state: &S, action: Action) -> FeatureVector {
        let next = successor(state, identity.index, action);
        ghost_avoidance(identity, &next)
            .merge(stay_on_defense(identity, &next))
            .merge(intercept_invaders(identity, state, &next))
            .merge(patrol_defended_food(identity, &next))
            .merge(movement_quality(identity, state, action))
            .merge(distance_to_start(identity, &next))
    }
}

/// Greedy on the engine score alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Baseline;

impl<S: GameState> FeatureExtractor<S> for Baseline {
    fn extract(&self, identity: &AgentIdentity, state: &S, action: Action) -> FeatureVector {
        let next = successor(state, identity.index, action);
        successor_score(identity, &next)
    }
}
