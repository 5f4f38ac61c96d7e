//! Property tests for the aggregate arithmetic (pure domain, no DB).

include!("common/proptest_prelude.rs");

use proptest::prelude::*;
use standings::domain::tally::{SideView, Tally};

fn arb_side() -> impl Strategy<Value = SideView> {
    (
        any::<bool>(),
        0i16..10,
        0i16..10,
        0i32..200,
        0i32..200,
    )
        .prop_map(|(won, sets_won, sets_lost, points_for, points_against)| SideView {
            won,
            sets_won,
            sets_lost,
            points_for,
            points_against,
        })
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    /// Property: retract is the exact inverse of apply on a consistent tally.
    #[test]
    fn prop_apply_retract_roundtrip(
        history in proptest::collection::vec(arb_side(), 0..20),
        side in arb_side(),
    ) {
        let mut tally = Tally::fold(&history);
        let before = tally;

        tally.apply(&side);
        tally.retract(&side);

        prop_assert_eq!(tally, before);
    }

    /// Property: fold equals incremental application in any order of the
    /// same multiset (addition is commutative).
    #[test]
    fn prop_fold_is_order_independent(
        mut history in proptest::collection::vec(arb_side(), 0..20),
    ) {
        let forward = Tally::fold(&history);
        history.reverse();
        let backward = Tally::fold(&history);

        prop_assert_eq!(forward, backward);
    }

    /// Property: structural invariants hold after any history.
    #[test]
    fn prop_counters_stay_consistent(
        history in proptest::collection::vec(arb_side(), 0..30),
    ) {
        let tally = Tally::fold(&history);

        prop_assert_eq!(tally.games_played, tally.wins + tally.losses);
        prop_assert_eq!(
            tally.set_differential(),
            tally.sets_won - tally.sets_lost
        );
        prop_assert!(tally.wins >= 0 && tally.losses >= 0);
        prop_assert!((0.0..=100.0).contains(&tally.win_percentage()));
    }

    /// Property: retract never drives a counter below zero, even against
    /// a tally that never saw the result being retracted.
    #[test]
    fn prop_retract_clamps_at_zero(
        history in proptest::collection::vec(arb_side(), 0..5),
        stray in arb_side(),
    ) {
        let mut tally = Tally::fold(&history);
        tally.retract(&stray);

        prop_assert!(tally.wins >= 0);
        prop_assert!(tally.losses >= 0);
        prop_assert!(tally.games_played >= 0);
        prop_assert!(tally.sets_won >= 0);
        prop_assert!(tally.sets_lost >= 0);
        prop_assert!(tally.points_for >= 0);
        prop_assert!(tally.points_against >= 0);
    }
}
