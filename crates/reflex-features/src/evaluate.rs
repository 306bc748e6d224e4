use crate::{Feature, FeatureVector, Weights};

/// Linear score `Σ features[f] * weights[f]` over every feature; absent entries count as zero.
///
/// Terms are summed in `Feature` declaration order regardless of how `features` was built.
pub fn evaluate(features: &FeatureVector, weights: &Weights) -> f64 {
    Feature::ALL
        .into_iter()
        .map(|f| features.get(f) * weights.get(f))
        .sum()
}
