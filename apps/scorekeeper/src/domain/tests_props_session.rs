//! Property tests for session bookkeeping: totals and starting-player rotation.

use proptest::prelude::*;
use scorekeeper_test_support::proptest_env;

use crate::domain::roster::default_player_name;
use crate::domain::session::{GameSession, RoundRecord};
use crate::domain::state::starting_player_for_round;
use crate::domain::test_gens;

fn seated(players: usize) -> GameSession {
    let mut session = GameSession::new();
    session.set_players((1..=players).map(default_player_name));
    session
}

proptest! {
    #![proptest_config(proptest_env::config())]

    /// A player's total is always the sum of their recorded round scores.
    #[test]
    fn prop_total_is_sum_of_history(
        (players, player) in test_gens::roster_and_player(),
        scores in prop::collection::vec(-100i32..=200, 0..12),
    ) {
        let mut session = seated(players);
        for (i, score) in scores.iter().enumerate() {
            let round_no = u8::try_from(i + 1).unwrap();
            session
                .append_round_record(player, RoundRecord {
                    round_no,
                    bid: 0,
                    tricks: 0,
                    bonuses: None,
                    cards: round_no,
                    score: *score,
                })
                .unwrap();
            let p = session.player(player).unwrap();
            prop_assert_eq!(p.total(), p.rounds().iter().map(|r| r.score).sum::<i32>());
        }
        prop_assert_eq!(session.player(player).unwrap().total(), scores.iter().sum::<i32>());
    }

    /// After `i` rotations the starting player is `i mod players`.
    #[test]
    fn prop_starting_player_rotates_mod_roster(
        players in test_gens::roster_size(),
        rounds in 1u8..=20,
    ) {
        let mut session = seated(players);
        for round_no in 1..=rounds {
            prop_assert_eq!(
                session.starting_player(),
                starting_player_for_round(0, round_no, players)
            );
            prop_assert_eq!(session.starting_player(), usize::from(round_no - 1) % players);
            session.advance_starting_player();
        }
    }
}
