use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every signal an extractor can emit.
///
/// The declaration order is also the evaluation order, so dot products do not depend on how a
/// vector was assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Feature {
    SuccessorScore,
    NumGhosts,
    GhostDistance,
    Stop,
    Reverse,
    NumOfFoodLeft,
    DistanceToFood,
    OnDefense,
    NumVisibleInvaders,
    VisibleInvaderDistance,
    InvisibleInvaderDistance,
    DistanceToStart,
}

impl Feature {
    pub const COUNT: usize = 12;

    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::SuccessorScore,
        Feature::NumGhosts,
        Feature::GhostDistance,
        Feature::Stop,
        Feature::Reverse,
        Feature::NumOfFoodLeft,
        Feature::DistanceToFood,
        Feature::OnDefense,
        Feature::NumVisibleInvaders,
        Feature::VisibleInvaderDistance,
        Feature::InvisibleInvaderDistance,
        Feature::DistanceToStart,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::SuccessorScore => "successor_score",
            Feature::NumGhosts => "num_ghosts",
            Feature::GhostDistance => "ghost_distance",
            Feature::Stop => "stop",
            Feature::Reverse => "reverse",
            Feature::NumOfFoodLeft => "num_of_food_left",
            Feature::DistanceToFood => "distance_to_food",
            Feature::OnDefense => "on_defense",
            Feature::NumVisibleInvaders => "num_visible_invaders",
            Feature::VisibleInvaderDistance => "visible_invader_distance",
            Feature::InvisibleInvaderDistance => "invisible_invader_distance",
            Feature::DistanceToStart => "distance_to_start",
        }
    }

    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Sparse feature values for one `(state, action)` evaluation. Unset features read as zero.
///
/// Vectors are built by chaining [`FeatureVector::with`] and [`FeatureVector::merge`]; each
/// contribution function produces its own vector so it can be tested in isolation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FeatureVector {
    values: BTreeMap<Feature, f64>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, feature: Feature, value: f64) -> Self {
        self.values.insert(feature, value);
        self
    }

    /// Union of both vectors; `other` wins on overlapping features.
    pub fn merge(mut self, other: FeatureVector) -> Self {
        self.values.extend(other.values);
        self
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values.get(&feature).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.values.contains_key(&feature)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        self.values.iter().map(|(f, v)| (*f, *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Feature, f64)> for FeatureVector {
    fn from_iter<I: IntoIterator<Item = (Feature, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
