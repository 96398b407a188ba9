// ABOUTME: Property tests for the rolenroll core.
// ABOUTME: Covers resolver purity, layout invariants, scoring, and termination.

use proptest::collection::vec;
use proptest::prelude::*;
use rolenroll::{
    face_layout, resolve_face, roll_pool_with_rng, score, DieConfig, Face, FastRng, MAX_MARKS,
};

fn arb_config() -> impl Strategy<Value = DieConfig> {
    prop_oneof![
        Just(DieConfig::Normal),
        (1u32..=4).prop_map(|k| DieConfig::advantage(k).0),
        (1u32..=4).prop_map(|k| DieConfig::negative(k).0),
    ]
}

fn arb_pointless_face() -> impl Strategy<Value = Face> {
    prop_oneof![Just(Face::Plus), Just(Face::Minus), Just(Face::Blank)]
}

proptest! {
    #[test]
    fn resolve_face_is_pure(config in arb_config(), raw in 1u8..=6) {
        prop_assert_eq!(resolve_face(config, raw), resolve_face(config, raw));
        prop_assert_eq!(resolve_face(config, raw), face_layout(config)[(raw - 1) as usize]);
    }

    #[test]
    fn layout_endpoints_fixed_for_every_kind(config in arb_config()) {
        let layout = face_layout(config);
        prop_assert_eq!(layout[0], Face::Point);
        prop_assert_eq!(layout[5], Face::Reroll);
    }

    #[test]
    fn layout_endpoints_fixed_even_for_raw_fields(plus in any::<u8>(), minus in any::<u8>()) {
        for config in [DieConfig::Advantage { plus }, DieConfig::Negative { minus }] {
            let layout = face_layout(config);
            prop_assert_eq!(layout[0], Face::Point);
            prop_assert_eq!(layout[5], Face::Reroll);
        }
    }

    #[test]
    fn advantage_marks_exactly_clamped_count(requested in 1u32..=12) {
        let (config, notice) = DieConfig::advantage(requested);
        let plus_faces = face_layout(config)
            .iter()
            .filter(|f| **f == Face::Plus)
            .count() as u32;

        prop_assert_eq!(plus_faces, requested.min(MAX_MARKS as u32));
        prop_assert_eq!(notice.is_some(), requested > MAX_MARKS as u32);
    }

    #[test]
    fn over_max_request_behaves_like_max(requested in 5u32..=50) {
        let (clamped, notice) = DieConfig::negative(requested);
        let (max, _) = DieConfig::negative(MAX_MARKS as u32);

        prop_assert_eq!(face_layout(clamped), face_layout(max));
        prop_assert!(notice.is_some());
    }

    #[test]
    fn base_and_reroll_points_partition_base_points(
        configs in vec(arb_config(), 0..20),
        seed in any::<u64>(),
    ) {
        let mut rng = FastRng::with_seed(seed);
        let result = roll_pool_with_rng(&configs, &mut rng);

        prop_assert_eq!(
            result.base_score() + result.reroll_points(),
            result.breakdown().base_points
        );
    }

    #[test]
    fn expansion_terminates_within_round_cap(
        configs in vec(arb_config(), 0..20),
        seed in any::<u64>(),
    ) {
        let mut rng = FastRng::with_seed(seed);
        let result = roll_pool_with_rng(&configs, &mut rng);

        prop_assert!(result.rounds().len() <= 100);
        prop_assert!(!result.rounds().iter().any(|round| round.is_empty()));
    }

    #[test]
    fn scoring_matches_flattened_faces(
        configs in vec(arb_config(), 1..20),
        seed in any::<u64>(),
    ) {
        let mut rng = FastRng::with_seed(seed);
        let result = roll_pool_with_rng(&configs, &mut rng);

        let recomputed = score(result.all_faces());
        prop_assert_eq!(*result.breakdown(), recomputed);
    }

    #[test]
    fn no_base_points_means_zero_total(faces in vec(arb_pointless_face(), 0..30)) {
        let breakdown = score(faces);
        prop_assert_eq!(breakdown.base_points, 0);
        prop_assert_eq!(breakdown.total, 0);
    }
}
