use prism_engine::{
    apply_axis_value, cross_product_size, linearize, AxisCandidates, CombinationSampler,
    EngineConfig, VariationEngine, VariationRequest,
};
use prism_model::{Attribute, TargetFormat};
use prism_test_utils::{arb_axis, arb_axis_candidates, arb_description};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn arb_format() -> impl Strategy<Value = TargetFormat> {
    proptest::sample::select(TargetFormat::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_linearize_is_deterministic(desc in arb_description(), format in arb_format()) {
        prop_assert_eq!(linearize(&desc, format), linearize(&desc.clone(), format));
    }

    #[test]
    fn prop_sentinels_never_rendered(desc in arb_description()) {
        let desc = desc
            .with_value(Attribute::Expression, "N/A")
            .with_value(Attribute::Actions, "static scene");
        let prompt = linearize(&desc, TargetFormat::Generic);
        prop_assert!(!prompt.contains("N/A"));
        prop_assert!(!prompt.contains("static scene"));
    }

    #[test]
    fn prop_axis_isolation(desc in arb_description(), axis in arb_axis(), value in "[a-z]{1,10}") {
        let out = apply_axis_value(&desc, axis, &value);
        let changed: Vec<Attribute> = Attribute::ALL
            .into_iter()
            .filter(|attr| desc.get(*attr) != out.get(*attr))
            .collect();
        prop_assert!(changed.len() <= 1);
        for attr in Attribute::ALL {
            if attr != axis.attribute() {
                prop_assert_eq!(desc.get(attr), out.get(attr));
            }
        }
    }

    #[test]
    fn prop_sampling_has_no_duplicates(
        axes in arb_axis_candidates(4, 4),
        count in 1usize..40,
        seed in any::<u64>(),
    ) {
        let candidates: Vec<AxisCandidates> = axes
            .into_iter()
            .map(|(axis, values)| AxisCandidates::new(axis, values))
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let out = CombinationSampler::new(usize::MAX)
            .sample(&candidates, count, &mut rng)
            .unwrap();
        let unique: HashSet<Vec<String>> = out.iter().map(|a| a.changelog()).collect();
        prop_assert_eq!(unique.len(), out.len());
    }

    #[test]
    fn prop_cap_correctness(
        axes in arb_axis_candidates(3, 4),
        count in 1usize..100,
        seed in any::<u64>(),
    ) {
        let request = axes
            .iter()
            .fold(VariationRequest::new(prism_test_utils::full_description()), |req, (axis, values)| {
                req.vary(*axis, values.clone())
            })
            .with_count(count);
        let product = cross_product_size(request.axis_candidates()).unwrap();

        let engine = VariationEngine::new(EngineConfig::new().with_seed(seed));
        let variants = engine.generate(&request).unwrap();
        prop_assert_eq!(variants.len(), count.min(product));
    }

    #[test]
    fn prop_changelog_fidelity(
        axes in arb_axis_candidates(6, 3),
        seed in any::<u64>(),
    ) {
        let request = axes
            .iter()
            .fold(VariationRequest::new(prism_test_utils::full_description()), |req, (axis, values)| {
                req.vary(*axis, values.clone())
            });
        let mut rng = StdRng::seed_from_u64(seed);
        let variants = VariationEngine::default().generate_with_rng(&request, &mut rng).unwrap();

        for variant in variants {
            prop_assert_eq!(variant.changelog.len(), axes.len());
            for ((axis, values), line) in axes.iter().zip(&variant.changelog) {
                let (name, value) = line.split_once(": ").unwrap();
                prop_assert_eq!(name, axis.key());
                prop_assert!(values.iter().any(|v| v == value));
            }
        }
    }

    #[test]
    fn prop_same_seed_same_variants(axes in arb_axis_candidates(4, 4), seed in any::<u64>()) {
        let request = axes
            .iter()
            .fold(VariationRequest::new(prism_test_utils::full_description()), |req, (axis, values)| {
                req.vary(*axis, values.clone())
            })
            .with_count(5);
        let engine = VariationEngine::new(EngineConfig::new().with_seed(seed));
        let a: Vec<_> = engine.generate(&request).unwrap().into_iter().map(|v| (v.changelog, v.modified_prompt)).collect();
        let b: Vec<_> = engine.generate(&request).unwrap().into_iter().map(|v| (v.changelog, v.modified_prompt)).collect();
        prop_assert_eq!(a, b);
    }
}
