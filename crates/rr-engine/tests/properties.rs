//! Property tests for face mapping, scoring and reroll termination.

use proptest::prelude::*;

use rr_engine::dice::{Face, face_for, layout};
use rr_engine::resolution::{Bonuses, PoolResolver, RerollPolicy, score_faces};
use rr_engine::{DieConfig, DieKind, FixedSource, PoolStep, ScriptedSource};

fn any_kind() -> impl Strategy<Value = DieKind> {
    prop_oneof![
        Just(DieKind::Normal),
        Just(DieKind::Advantage),
        Just(DieKind::Negative),
    ]
}

fn any_config() -> impl Strategy<Value = DieConfig> {
    (any_kind(), proptest::option::of(any::<i64>()))
        .prop_map(|(kind, count)| DieConfig::new(kind, count))
}

fn any_face() -> impl Strategy<Value = Face> {
    prop_oneof![
        Just(Face::Point),
        Just(Face::Reroll),
        Just(Face::Plus),
        Just(Face::Minus),
        Just(Face::Blank),
    ]
}

proptest! {
    #[test]
    fn prop_layout_ends_are_fixed(config in any_config()) {
        let faces = *layout(&config).faces();
        prop_assert_eq!(faces[0], Face::Point);
        prop_assert_eq!(faces[5], Face::Reroll);
    }

    #[test]
    fn prop_layout_special_count(kind in any_kind(), count in any::<i64>()) {
        let config = DieConfig::new(kind, Some(count));
        let die_layout = layout(&config);
        let middle = &die_layout.faces()[1..5];
        let expected = count.clamp(1, 4) as usize;
        match kind {
            DieKind::Normal => {
                prop_assert!(middle.iter().all(|f| *f == Face::Blank));
            }
            DieKind::Advantage => {
                prop_assert_eq!(middle.iter().filter(|f| **f == Face::Plus).count(), expected);
                prop_assert_eq!(middle.iter().filter(|f| **f == Face::Blank).count(), 4 - expected);
            }
            DieKind::Negative => {
                prop_assert_eq!(middle.iter().filter(|f| **f == Face::Minus).count(), expected);
                prop_assert_eq!(middle.iter().filter(|f| **f == Face::Blank).count(), 4 - expected);
            }
        }
    }

    #[test]
    fn prop_layout_is_deterministic(config in any_config()) {
        prop_assert_eq!(layout(&config), layout(&config));
    }

    #[test]
    fn prop_face_for_total(config in any_config(), raw in any::<i64>()) {
        let face = face_for(&config, raw);
        prop_assert_eq!(face, layout(&config).face(raw.clamp(1, 6)));
    }

    #[test]
    fn prop_dice_total_needs_points(
        faces in proptest::collection::vec(any_face(), 0..40),
        success in -5i64..10,
        penalty in -5i64..10,
    ) {
        let score = score_faces(faces.iter().copied(), Bonuses::new(success, penalty));
        if score.base_points == 0 {
            prop_assert_eq!(score.dice_total, 0);
        }
        prop_assert!(score.reroll_count <= score.base_points);
        let expected_final =
            (i64::from(score.dice_total) + success.max(0) - penalty.max(0)).max(0);
        prop_assert_eq!(i64::from(score.final_total), expected_final);
    }

    #[test]
    fn prop_automatic_terminates(
        configs in proptest::collection::vec(any_config(), 0..8),
        script in proptest::collection::vec(1u8..=6, 1..20),
    ) {
        let mut resolver = PoolResolver::new(ScriptedSource::new(script));
        let outcome = resolver.resolve_pool(&configs, Bonuses::default()).finish();
        prop_assert!(outcome.rounds.len() <= 100);
        prop_assert_eq!(outcome.rounds[0].count(), configs.len());
    }

    #[test]
    fn prop_policies_agree(
        configs in proptest::collection::vec(any_config(), 0..8),
        script in proptest::collection::vec(1u8..=6, 1..20),
    ) {
        let mut auto = PoolResolver::new(ScriptedSource::new(script.clone()));
        let expected = auto.resolve_pool(&configs, Bonuses::new(1, 1)).finish();

        let mut confirmed = PoolResolver::new(ScriptedSource::new(script))
            .with_policy(RerollPolicy::Confirmed);
        let mut step = confirmed.resolve_pool(&configs, Bonuses::new(1, 1));
        let outcome = loop {
            match step {
                PoolStep::Finished(outcome) => break outcome,
                PoolStep::Awaiting(pending) => step = confirmed.continue_pool(pending),
            }
        };
        prop_assert_eq!(outcome, expected);
    }
}

#[test]
fn always_six_stops_at_one_hundred_rounds() {
    let mut resolver = PoolResolver::new(FixedSource(6));
    let outcome = resolver
        .resolve_pool(&[DieConfig::advantage(3)], Bonuses::default())
        .finish();
    assert_eq!(outcome.rounds.len(), 100);
    assert!(outcome.rounds.iter().all(|r| r.count() == 1));
}

#[test]
fn scenario_e_counts_clamp() {
    assert_eq!(DieConfig::advantage(7).plus_count(), Some(4));
    assert_eq!(DieConfig::negative(0).minus_count(), Some(1));
}
