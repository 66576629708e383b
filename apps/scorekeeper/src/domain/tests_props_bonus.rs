//! Property tests for bonus ownership.

use proptest::prelude::*;
use scorekeeper_test_support::proptest_env;

use crate::domain::bonus::{BonusBoard, CounterBonus, ExclusiveBonus};
use crate::domain::test_gens;

#[derive(Debug, Clone)]
enum Edit {
    Flag(usize, ExclusiveBonus, bool),
    Toggle(usize, ExclusiveBonus),
    Counter(usize, CounterBonus, i32),
}

fn edit(players: usize) -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0..players, test_gens::exclusive_bonus(), any::<bool>())
            .prop_map(|(p, f, on)| Edit::Flag(p, f, on)),
        (0..players, test_gens::exclusive_bonus()).prop_map(|(p, f)| Edit::Toggle(p, f)),
        (0..players, test_gens::counter_bonus(), -10i32..=10)
            .prop_map(|(p, k, v)| Edit::Counter(p, k, v)),
    ]
}

fn edits() -> impl Strategy<Value = Vec<Edit>> {
    test_gens::roster_size().prop_flat_map(|players| prop::collection::vec(edit(players), 0..40))
}

proptest! {
    #![proptest_config(proptest_env::config())]

    /// Any sequence of edits leaves every exclusive bonus with at most one holder,
    /// and every counter within its cap.
    #[test]
    fn prop_board_stays_consistent(edits in edits()) {
        let mut board = BonusBoard::new();
        for edit in edits {
            match edit {
                Edit::Flag(p, f, on) => board.set_flag(p, f, on),
                Edit::Toggle(p, f) => {
                    board.toggle(p, f);
                }
                Edit::Counter(p, k, v) => {
                    board.set_counter(p, k, v);
                }
            }
            prop_assert!(board.is_consistent());
        }
        for (_, tally) in board.iter() {
            for kind in CounterBonus::ALL {
                prop_assert!(tally.count(kind) <= kind.cap());
            }
        }
    }

    /// Whoever claims a flag last holds it.
    #[test]
    fn prop_last_claim_wins(
        (players, first) in test_gens::roster_and_player(),
        second_offset in 0usize..8,
        flag in test_gens::exclusive_bonus(),
    ) {
        let second = (first + second_offset) % players;
        let mut board = BonusBoard::new();
        board.set_flag(first, flag, true);
        board.set_flag(second, flag, true);
        prop_assert_eq!(board.holder_of(flag), Some(second));
    }
}
