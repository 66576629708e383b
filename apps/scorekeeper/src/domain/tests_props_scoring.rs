//! Property tests for round scoring (pure domain).
//!
//! Scoring contract:
//! - A zero bid is worth +10 per card when made and -10 per card when missed
//! - A made non-zero bid is worth 20 per trick bid, whatever was dealt
//! - A missed non-zero bid loses 10 per trick off
//! - Bonuses add on top of the base score

use proptest::prelude::*;
use scorekeeper_test_support::proptest_env;

use crate::domain::scoring::{base_score, bonus_contribution, score};
use crate::domain::test_gens;

proptest! {
    #![proptest_config(proptest_env::config())]

    #[test]
    fn prop_zero_bid_scales_with_cards(
        (cards, tricks) in test_gens::cards().prop_flat_map(|c| (Just(c), 1..=c)),
    ) {
        prop_assert_eq!(score(0, 0, cards, None), 10 * i32::from(cards));
        prop_assert_eq!(score(0, tricks, cards, None), -10 * i32::from(cards));
    }

    #[test]
    fn prop_made_bid_independent_of_cards(
        bid in 1u8..=10,
        extra_a in 0u8..=5,
        extra_b in 0u8..=5,
    ) {
        let a = score(bid, bid, bid + extra_a, None);
        let b = score(bid, bid, bid + extra_b, None);
        prop_assert_eq!(a, 20 * i32::from(bid));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_missed_bid_costs_ten_per_trick_off(
        (cards, bid, tricks) in test_gens::round_entry(),
    ) {
        prop_assume!(bid > 0 && bid != tricks);
        let diff = (i32::from(bid) - i32::from(tricks)).abs();
        prop_assert_eq!(score(bid, tricks, cards, None), -10 * diff);
    }

    #[test]
    fn prop_bonuses_are_additive(
        (cards, bid, tricks) in test_gens::round_entry(),
        tally in test_gens::bonus_tally(),
    ) {
        prop_assert_eq!(
            score(bid, tricks, cards, Some(&tally)),
            base_score(bid, tricks, cards) + bonus_contribution(&tally)
        );
        prop_assert!(bonus_contribution(&tally) >= 0);
    }
}
