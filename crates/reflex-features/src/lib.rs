//! Feature extraction and linear evaluation.
//!
//! A role scores a candidate action by building a sparse [`FeatureVector`] from the hypothetical
//! successor state and taking its dot product with a fixed [`Weights`] record.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod evaluate;
pub mod extract;
pub mod feature;
pub mod weights;

pub use evaluate::evaluate;
pub use extract::{Baseline, FeatureExtractor, Forager, Sentinel};
pub use feature::{Feature, FeatureVector};
pub use weights::{Weights, BASELINE_WEIGHTS, FORAGER_WEIGHTS, SENTINEL_WEIGHTS};
