use std::collections::BTreeMap;

use crate::Feature;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One coefficient per [`Feature`]; features a role does not care about stay at zero.
///
/// Serialized as a `feature_name: coefficient` map. Unknown names are rejected on load.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "BTreeMap<Feature, f64>", into = "BTreeMap<Feature, f64>")
)]
pub struct Weights {
    coefficients: [f64; Feature::COUNT],
}

impl Weights {
    pub const ZERO: Weights = Weights {
        coefficients: [0.0; Feature::COUNT],
    };

    pub const fn with(mut self, feature: Feature, weight: f64) -> Self {
        self.coefficients[feature.index()] = weight;
        self
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.coefficients[feature.index()]
    }

    /// Non-zero coefficients in feature order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL
            .into_iter()
            .map(|f| (f, self.get(f)))
            .filter(|(_, w)| *w != 0.0)
    }
}

impl Default for Weights {
    fn default() -> Self {
        Weights::ZERO
    }
}

impl From<BTreeMap<Feature, f64>> for Weights {
    fn from(map: BTreeMap<Feature, f64>) -> Self {
        map.into_iter()
            .fold(Weights::ZERO, |w, (feature, value)| w.with(feature, value))
    }
}

impl From<Weights> for BTreeMap<Feature, f64> {
    fn from(weights: Weights) -> Self {
        weights.iter().collect()
    }
}

/// Collect food, keep clear of defenders, keep moving.
///
/// Turning back on the current heading costs 30 per move; standing still costs 100.
pub const FORAGER_WEIGHTS: Weights = Weights::ZERO
    .with(Feature::NumOfFoodLeft, 100.0)
    .with(Feature::DistanceToFood, -1.0)
    .with(Feature::NumGhosts, -1000.0)
    .with(Feature::GhostDistance, -13.0)
    .with(Feature::Stop, -100.0)
    .with(Feature::Reverse, -30.0);

/// Stay home, chase visible intruders, drift toward the food being guarded.
pub const SENTINEL_WEIGHTS: Weights = Weights::ZERO
    .with(Feature::NumVisibleInvaders, -1000.0)
    .with(Feature::OnDefense, 100.0)
    .with(Feature::VisibleInvaderDistance, -10.0)
    .with(Feature::InvisibleInvaderDistance, -5.0)
    .with(Feature::Stop, -100.0)
    .with(Feature::Reverse, -2.0)
    .with(Feature::DistanceToFood, -0.5)
    .with(Feature::DistanceToStart, 0.01);

pub const BASELINE_WEIGHTS: Weights = Weights::ZERO.with(Feature::SuccessorScore, 1.0);
