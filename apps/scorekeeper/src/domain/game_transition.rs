use serde::Serialize;

use crate::domain::state::{Phase, PlayerId};

/// The parts of a game that transitions are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub round_no: u8,
    pub phase: Phase,
    pub starting_player: PlayerId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: bids locked in, trick entry opened.
    TrickCountingStarted { round_no: u8 },

    /// Edge-triggered: trick entry reopened bidding for the same round.
    BiddingReopened { round_no: u8 },

    /// Explicit: a round was scored and recorded.
    RoundCompleted { round_no: u8 },

    /// Edge-triggered: a new round entered bidding.
    RoundStarted { round_no: u8 },

    /// Edge-triggered: the starting player changed.
    StartingPlayerBecame { player: PlayerId },

    /// Edge-triggered: the final round was recorded.
    GameEnded,
}

/// Derive transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Phase change within the same round
    if before.round_no == after.round_no {
        match (before.phase, after.phase) {
            (Phase::Bidding, Phase::TrickCounting) => {
                transitions.push(GameTransition::TrickCountingStarted {
                    round_no: after.round_no,
                });
            }
            (Phase::TrickCounting, Phase::Bidding) => {
                transitions.push(GameTransition::BiddingReopened {
                    round_no: after.round_no,
                });
            }
            _ => {}
        }
    }

    // 2. Starting player change
    if before.starting_player != after.starting_player {
        transitions.push(GameTransition::StartingPlayerBecame {
            player: after.starting_player,
        });
    }

    // 3. New round
    if after.round_no != before.round_no && after.phase == Phase::Bidding {
        transitions.push(GameTransition::RoundStarted {
            round_no: after.round_no,
        });
    }

    // 4. Game end (!GameComplete -> GameComplete)
    if before.phase != Phase::GameComplete && after.phase == Phase::GameComplete {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}
