#![cfg(feature = "serde")]

use reflex_features::{Feature, Weights, SENTINEL_WEIGHTS};

#[test]
fn weights_load_from_named_coefficients() {
    let weights: Weights =
        serde_json::from_str(r#"{ "stop": -50.0, "distance_to_food": -2.0 }"#).expect("parse");

    assert_eq!(weights.get(Feature::Stop), -50.0);
    assert_eq!(weights.get(Feature::DistanceToFood), -2.0);
    assert_eq!(weights.get(Feature::Reverse), 0.0);
}

#[test]
fn misspelled_feature_names_are_rejected() {
    let err = serde_json::from_str::<Weights>(r#"{ "rev": -30.0 }"#);
    assert!(err.is_err());
}

#[test]
fn serialized_weights_list_only_used_features() {
    let value = serde_json::to_value(SENTINEL_WEIGHTS).expect("serialize");
    let map = value.as_object().expect("object");
    assert_eq!(map.len(), 8);
    assert_eq!(map["on_defense"], 100.0);
}
