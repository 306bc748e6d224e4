//! Feature contributions.
//!
//! Each function looks at one concern and returns a fresh [`FeatureVector`] holding only the
//! features it owns. Extractors merge them; within a role the owned feature sets are disjoint, so
//! merge order never changes the result.

use reflex_core::{Action, AgentIdentity, Cell, GameState, MazeDistance};

use crate::{Feature, FeatureVector};

/// Defenders with at least this many scared ticks left are not a threat.
pub const SCARED_THRESHOLD: u32 = 3;

/// `ghost_distance` is `DANGER_RADIUS - distance`, so it grows as a defender closes in.
pub const DANGER_RADIUS: f64 = 5.0;

fn nearest(
    distancer: &dyn MazeDistance,
    from: Cell,
    targets: impl IntoIterator<Item = Cell>,
) -> Option<u32> {
    targets
        .into_iter()
        .map(|t| distancer.maze_distance(from, t))
        .min()
}

fn own_cell<S: GameState>(identity: &AgentIdentity, state: &S) -> Option<Cell> {
    state.agent_state(identity.index).cell()
}

/// `num_ghosts` and, while intruding, `ghost_distance` to the closest dangerous defender.
pub fn ghost_avoidance<S: GameState>(identity: &AgentIdentity, successor: &S) -> FeatureVector {
    let ghosts: Vec<Cell> = successor
        .opponents(identity.index)
        .into_iter()
        .map(|o| successor.agent_state(o))
        .filter(|o| o.is_dangerous_defender(SCARED_THRESHOLD))
        .filter_map(|o| o.cell())
        .collect();

    let features = FeatureVector::new().with(Feature::NumGhosts, ghosts.len() as f64);

    let me = successor.agent_state(identity.index);
    if !me.intruding {
        return features;
    }
    let Some(my_cell) = me.cell() else {
        return features;
    };
    match nearest(successor.distancer(), my_cell, ghosts) {
        Some(d) => features.with(Feature::GhostDistance, DANGER_RADIUS - d as f64),
        None => features,
    }
}

/// `stop` for standing still, `reverse` for turning back on the current heading.
pub fn movement_quality<S: GameState>(
    identity: &AgentIdentity,
    state: &S,
    action: Action,
) -> FeatureVector {
    let mut features = FeatureVector::new();
    if action == Action::Stop {
        features = features.with(Feature::Stop, 1.0);
    }
    if action == state.agent_state(identity.index).facing.reverse() {
        features = features.with(Feature::Reverse, 1.0);
    }
    features
}

/// `num_of_food_left` (negated count) and `distance_to_food` to the closest collectible.
pub fn food_progress<S: GameState>(identity: &AgentIdentity, successor: &S) -> FeatureVector {
    let food = successor.collectible_resources(identity.index);
    let features = FeatureVector::new().with(Feature::NumOfFoodLeft, -(food.len() as f64));

    let closest = own_cell(identity, successor)
        .and_then(|me| nearest(successor.distancer(), me, food));
    match closest {
        Some(d) => features.with(Feature::DistanceToFood, d as f64),
        None => features,
    }
}

pub fn stay_on_defense<S: GameState>(identity: &AgentIdentity, successor: &S) -> FeatureVector {
    let on_defense = if successor.agent_state(identity.index).intruding {
        0.0
    } else {
        1.0
    };
    FeatureVector::new().with(Feature::OnDefense, on_defense)
}

/// Visible invaders from the successor, plus the noisy-distance fallback from the current state.
pub fn intercept_invaders<S: GameState>(
    identity: &AgentIdentity,
    state: &S,
    successor: &S,
) -> FeatureVector {
    let invaders: Vec<Cell> = successor
        .opponents(identity.index)
        .into_iter()
        .map(|o| successor.agent_state(o))
        .filter(|o| o.is_visible_intruder())
        .filter_map(|o| o.cell())
        .collect();

    let mut features =
        FeatureVector::new().with(Feature::NumVisibleInvaders, invaders.len() as f64);

    let closest = own_cell(identity, successor)
        .and_then(|me| nearest(successor.distancer(), me, invaders));
    if let Some(d) = closest {
        features = features.with(Feature::VisibleInvaderDistance, d as f64);
    }

    let noisy = state
        .noisy_opponent_distances(identity.index)
        .into_iter()
        .reduce(f64::min);
    if let Some(d) = noisy {
        features = features.with(Feature::InvisibleInvaderDistance, d);
    }
    features
}

/// `distance_to_food` to the closest resource this agent's team defends.
pub fn patrol_defended_food<S: GameState>(
    identity: &AgentIdentity,
    successor: &S,
) -> FeatureVector {
    let closest = own_cell(identity, successor).and_then(|me| {
        nearest(
            successor.distancer(),
            me,
            successor.defended_resources(identity.index),
        )
    });
    match closest {
        Some(d) => FeatureVector::new().with(Feature::DistanceToFood, d as f64),
        None => FeatureVector::new(),
    }
}

pub fn distance_to_start<S: GameState>(identity: &AgentIdentity, successor: &S) -> FeatureVector {
    match own_cell(identity, successor) {
        Some(me) => FeatureVector::new().with(
            Feature::DistanceToStart,
            successor.distancer().maze_distance(me, identity.start) as f64,
        ),
        None => FeatureVector::new(),
    }
}

pub fn successor_score<S: GameState>(identity: &AgentIdentity, successor: &S) -> FeatureVector {
    FeatureVector::new().with(Feature::SuccessorScore, successor.score(identity.index))
}
