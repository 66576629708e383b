#![allow(dead_code)]

use scorekeeper::{GameFlow, GameMode, GameSession};
use scorekeeper_test_support::roster_fixtures::player_names;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    scorekeeper_test_support::logging::init();
}

/// Session with `mode` selected and `players` named players seated.
pub fn seated_session(mode: GameMode, players: usize) -> GameSession {
    let mut session = GameSession::new();
    session.set_mode(mode);
    session.set_players(player_names(players));
    session
}

/// Game in round 1 bidding.
pub fn started(mode: GameMode, players: usize) -> GameFlow {
    GameFlow::start(seated_session(mode, players)).expect("seated session should start")
}

/// Enter the same bid and tricks for everyone and score the round.
pub fn play_round(flow: &mut GameFlow, bids: &[i32], tricks: &[i32]) {
    for (player, bid) in bids.iter().enumerate() {
        flow.update_bid(player, *bid).expect("bid in range");
    }
    flow.advance_to_tricks().expect("bids valid");
    for (player, won) in tricks.iter().enumerate() {
        flow.update_tricks(player, *won).expect("tricks in range");
    }
    flow.complete_round().expect("round completes");
}
