//! Round state machine - drives a session through bidding, trick entry and
//! scoring, round after round, until the mode's final round is recorded.
//!
//! `GameFlow` owns the [`GameSession`] for as long as a game is being played.
//! Every mutation is computed on a copy of the state and committed as a
//! single replacement, so a rejected input leaves nothing half-applied.

mod player_actions;
mod round_lifecycle;

use std::fmt;

use tracing::{debug, info};

use crate::domain::bonus::ExclusiveBonus;
use crate::domain::game_modes::GameMode;
use crate::domain::game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
use crate::domain::session::GameSession;
use crate::domain::snapshot::RoundSnapshot;
use crate::domain::state::{Phase, PlayerId, RoundState, WorkingEntry};
use crate::error::AppError;

pub use round_lifecycle::RoundOutcome;

/// What is missing before a game can be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSetup {
    GameMode,
    Players,
}

/// Redirect back to mode/roster selection. Hands the session back untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupRequired {
    pub missing: MissingSetup,
    pub session: GameSession,
}

impl fmt::Display for SetupRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.missing {
            MissingSetup::GameMode => write!(f, "choose a game mode first"),
            MissingSetup::Players => write!(f, "add players first"),
        }
    }
}

impl From<SetupRequired> for AppError {
    fn from(e: SetupRequired) -> Self {
        AppError::setup_required(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameFlow {
    mode: GameMode,
    session: GameSession,
    round: RoundState,
    phase: Phase,
}

impl GameFlow {
    /// Enter bidding for round 1. Requires a mode and a non-empty roster.
    pub fn start(session: GameSession) -> Result<Self, SetupRequired> {
        let Some(mode) = session.mode().copied() else {
            debug!("No game mode selected; redirecting to setup");
            return Err(SetupRequired {
                missing: MissingSetup::GameMode,
                session,
            });
        };
        if session.players().is_empty() {
            debug!("Empty roster; redirecting to setup");
            return Err(SetupRequired {
                missing: MissingSetup::Players,
                session,
            });
        }
        let Some(round) = Self::enter_bidding(&mode, &session, 1) else {
            // A mode with zero rounds has nothing to play.
            return Err(SetupRequired {
                missing: MissingSetup::GameMode,
                session,
            });
        };

        info!(
            mode = mode.id,
            players = session.players().len(),
            rounds = mode.rounds,
            "Game started"
        );
        Ok(Self {
            mode,
            session,
            round,
            phase: Phase::Bidding,
        })
    }

    pub fn mode(&self) -> &GameMode {
        &self.mode
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round_no(&self) -> u8 {
        self.round.round_no
    }

    pub fn total_rounds(&self) -> u8 {
        self.mode.rounds
    }

    pub fn cards_this_round(&self) -> u8 {
        self.round.cards
    }

    pub fn entry(&self, player: PlayerId) -> Option<WorkingEntry> {
        self.round.entries.get(player).copied()
    }

    pub fn score_preview(&self, player: PlayerId) -> Option<i32> {
        self.round.score_preview(player)
    }

    pub fn holder_of(&self, flag: ExclusiveBonus) -> Option<PlayerId> {
        self.round.bonuses.holder_of(flag)
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::GameComplete
    }

    /// Bidding may be closed and trick entry opened.
    pub fn can_advance_bids(&self) -> bool {
        self.phase == Phase::Bidding && self.round.bids_in_range()
    }

    /// Trick entry may be closed and the round scored.
    pub fn can_complete_round(&self) -> bool {
        self.phase == Phase::TrickCounting && self.round.tricks_in_range()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::build(
            self.mode.id,
            self.mode.rounds,
            &self.session,
            &self.round,
            self.phase,
        )
    }

    /// Discard the whole session; the caller returns to mode selection.
    pub fn start_new_game(self) -> GameSession {
        info!(round = self.round.round_no, "Starting new game; session reset");
        let mut session = self.session;
        session.reset();
        session
    }

    /// Hand the session back, e.g. to show final standings.
    pub fn into_session(self) -> GameSession {
        self.session
    }

    fn lifecycle_view(&self) -> GameLifecycleView {
        GameLifecycleView {
            round_no: self.round.round_no,
            phase: self.phase,
            starting_player: self.session.starting_player(),
        }
    }

    /// Replace the whole state and report what changed.
    fn commit(&mut self, next: GameFlow) -> Vec<GameTransition> {
        let before = self.lifecycle_view();
        *self = next;
        let transitions = derive_game_transitions(&before, &self.lifecycle_view());
        for transition in &transitions {
            debug!(?transition, "Game transition");
        }
        transitions
    }
}
