use tracing::{debug, info, warn};

use super::GameFlow;
use crate::domain::game_modes::GameMode;
use crate::domain::game_transition::GameTransition;
use crate::domain::scoring::score;
use crate::domain::session::{GameSession, RoundRecord};
use crate::domain::state::{Phase, RoundState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of scoring a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round_no: u8,
    /// Score each player got this round, in roster order.
    pub scores: Vec<i32>,
    pub transitions: Vec<GameTransition>,
}

impl RoundOutcome {
    pub fn game_ended(&self) -> bool {
        self.transitions.contains(&GameTransition::GameEnded)
    }
}

impl GameFlow {
    /// Fresh working data for `round_no`, or `None` past the mode's schedule.
    pub(super) fn enter_bidding(
        mode: &GameMode,
        session: &GameSession,
        round_no: u8,
    ) -> Option<RoundState> {
        let cards = mode.cards_per_round(round_no)?;
        info!(
            round = round_no,
            cards,
            starting_player = session.starting_player(),
            "Round started"
        );
        Some(RoundState::new(round_no, cards, session.players().len()))
    }

    /// Close bidding and open trick entry.
    pub fn advance_to_tricks(&mut self) -> Result<Vec<GameTransition>, DomainError> {
        if self.phase != Phase::Bidding {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Not in bidding phase",
            ));
        }
        if !self.round.bids_in_range() {
            return Err(DomainError::validation(
                ValidationKind::InvalidBid,
                format!("Every bid must be in range 0..={}", self.round.cards),
            ));
        }

        let mut next = self.clone();
        next.phase = Phase::TrickCounting;
        debug!(round = self.round.round_no, "Transition: Bidding -> TrickCounting");
        Ok(self.commit(next))
    }

    /// Go back from trick entry to bidding within the same round.
    ///
    /// Bids, tricks and bonus claims entered so far are kept.
    pub fn back_to_bidding(&mut self) -> Result<Vec<GameTransition>, DomainError> {
        if self.phase != Phase::TrickCounting {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Not in trick counting phase",
            ));
        }

        let mut next = self.clone();
        next.phase = Phase::Bidding;
        Ok(self.commit(next))
    }

    /// Score the round, record it for every player, then either start the
    /// next round (rotating the starting player) or end the game.
    pub fn complete_round(&mut self) -> Result<RoundOutcome, DomainError> {
        if self.phase != Phase::TrickCounting {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Not in trick counting phase",
            ));
        }
        if !self.round.tricks_in_range() {
            return Err(DomainError::validation(
                ValidationKind::InvalidTricks,
                format!("Every tricks count must be in range 0..={}", self.round.cards),
            ));
        }

        let round_no = self.round.round_no;
        let cards = self.round.cards;
        let mut next = self.clone();
        next.phase = Phase::RoundComplete;

        let mut scores = Vec::with_capacity(self.round.entries.len());
        for (player, entry) in self.round.entries.iter().enumerate() {
            let bonuses = self
                .round
                .bonuses
                .tally(player)
                .copied()
                .filter(|tally| !tally.is_empty());
            let round_score = score(entry.bid, entry.tricks, cards, bonuses.as_ref());
            next.session.append_round_record(
                player,
                RoundRecord {
                    round_no,
                    bid: entry.bid,
                    tricks: entry.tricks,
                    bonuses,
                    cards,
                    score: round_score,
                },
            )?;
            scores.push(round_score);
        }
        next.round.bonuses.clear();
        info!(round = round_no, ?scores, "Round completed");

        if self.mode.is_final_round(round_no) {
            next.phase = Phase::GameComplete;
            let leader = next.session.standings().into_iter().next().map(|s| s.name);
            info!(rounds = round_no, leader = leader.as_deref(), "Game complete");
        } else {
            next.session.advance_starting_player();
            let next_round_no = round_no + 1;
            let Some(round) = Self::enter_bidding(&self.mode, &next.session, next_round_no) else {
                warn!(round = next_round_no, mode = self.mode.id, "Round missing from schedule");
                return Err(DomainError::validation(
                    ValidationKind::InvalidRound,
                    format!("Round {next_round_no} is not in the {} schedule", self.mode.id),
                ));
            };
            next.round = round;
            next.phase = Phase::Bidding;
        }

        let mut transitions = vec![GameTransition::RoundCompleted { round_no }];
        transitions.extend(self.commit(next));
        Ok(RoundOutcome {
            round_no,
            scores,
            transitions,
        })
    }
}
