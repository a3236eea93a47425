//! Store-wide guarantees under arbitrary drawing sequences.

use mapdraw_geometry::{Candidate, build};
use mapdraw_model::{FeatureStore, InMemoryFeatureStore, Limits, LngLat, Tool};
use mapdraw_validate::{DEFAULT_AREA_TOLERANCE, Relation, ValidationOptions, Validator, classify};
use proptest::prelude::*;

fn position() -> impl Strategy<Value = LngLat> {
    (-1.0..1.0f64, -1.0..1.0f64).prop_map(|(lng, lat)| LngLat::new(lng, lat))
}

fn candidate() -> impl Strategy<Value = Candidate> {
    prop_oneof![
        (position(), position())
            .prop_map(|(a, b)| build(Tool::Rectangle, &[a, b]).unwrap()),
        (position(), -0.6..0.6f64, -0.6..0.6f64).prop_map(|(center, dlng, dlat)| {
            let drag = LngLat::new(center.lng + dlng, center.lat + dlat);
            build(Tool::Circle, &[center, drag]).unwrap()
        }),
        (position(), position(), position())
            .prop_map(|(a, b, c)| build(Tool::Polygon, &[a, b, c]).unwrap()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn committed_shapes_never_overlap(sequence in prop::collection::vec(candidate(), 1..8)) {
        let validator = Validator::new(Limits::uniform(100), ValidationOptions::default());
        let mut store = InMemoryFeatureStore::new();

        for candidate in sequence {
            let before = store.list().to_vec();
            if let Ok(admitted) = validator.validate(candidate, &store) {
                prop_assert!(admitted.shape.geometry.area() > 0.0);
                store.append(admitted.shape);
            }
            prop_assert_eq!(&store.list()[..before.len()], &before[..]);
        }

        let areas: Vec<_> = store
            .list()
            .iter()
            .filter_map(|shape| shape.geometry.to_multi_polygon())
            .collect();
        for (i, earlier) in areas.iter().enumerate() {
            for later in &areas[i + 1..] {
                prop_assert_eq!(
                    classify(later, earlier, DEFAULT_AREA_TOLERANCE),
                    Relation::Separate
                );
            }
        }
    }
}
