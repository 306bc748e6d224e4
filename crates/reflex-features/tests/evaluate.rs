use reflex_features::{evaluate, Feature, FeatureVector, Weights, FORAGER_WEIGHTS};

#[test]
fn dot_product_ignores_insertion_order() {
    let a = FeatureVector::new()
        .with(Feature::NumOfFoodLeft, -7.0)
        .with(Feature::DistanceToFood, 3.0)
        .with(Feature::Stop, 1.0);
    let b = FeatureVector::new()
        .with(Feature::Stop, 1.0)
        .with(Feature::DistanceToFood, 3.0)
        .with(Feature::NumOfFoodLeft, -7.0);

    let expected = -700.0 - 3.0 - 100.0;
    assert_eq!(a, b);
    assert!((evaluate(&a, &FORAGER_WEIGHTS) - expected).abs() < 1e-9);
    assert!((evaluate(&b, &FORAGER_WEIGHTS) - expected).abs() < 1e-9);
}

#[test]
fn keys_missing_on_either_side_count_as_zero() {
    // OnDefense has no forager weight; Reverse is weighted but absent from the vector.
    let features = FeatureVector::new()
        .with(Feature::OnDefense, 1.0)
        .with(Feature::GhostDistance, 2.0);
    assert!((evaluate(&features, &FORAGER_WEIGHTS) - (-26.0)).abs() < 1e-9);

    assert_eq!(evaluate(&FeatureVector::new(), &FORAGER_WEIGHTS), 0.0);
    assert_eq!(evaluate(&features, &Weights::ZERO), 0.0);
}

#[test]
fn merge_is_a_union_and_reads_default_to_zero() {
    let merged = FeatureVector::new()
        .with(Feature::NumGhosts, 1.0)
        .merge(FeatureVector::new().with(Feature::Stop, 1.0));

    assert_eq!(merged.len(), 2);
    assert_eq!(merged.get(Feature::NumGhosts), 1.0);
    assert_eq!(merged.get(Feature::Stop), 1.0);
    assert_eq!(merged.get(Feature::DistanceToStart), 0.0);
    assert!(!merged.contains(Feature::DistanceToStart));
}

#[test]
fn feature_names_round_trip_through_lookup() {
    for feature in Feature::ALL {
        assert_eq!(Feature::from_name(feature.name()), Some(feature));
    }
    assert_eq!(Feature::from_name("rev"), None);
}

#[test]
fn weights_expose_only_non_zero_coefficients() {
    let w = Weights::ZERO
        .with(Feature::Stop, -100.0)
        .with(Feature::DistanceToStart, 0.5);
    let entries: Vec<_> = w.iter().collect();
    assert_eq!(
        entries,
        vec![(Feature::Stop, -100.0), (Feature::DistanceToStart, 0.5)]
    );
    assert_eq!(w.get(Feature::Reverse), 0.0);
}
