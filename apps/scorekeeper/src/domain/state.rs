use serde::Serialize;

use crate::domain::bonus::BonusBoard;
use crate::domain::rules::valid_bid_range;
use crate::domain::scoring::score;

/// Position in the roster, 0-based.
pub type PlayerId = usize;

/// Round progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Players' bids are being entered.
    Bidding,
    /// Tricks won and bonuses are being entered.
    TrickCounting,
    /// Round scored and recorded; the next round has not started yet.
    RoundComplete,
    /// Final round scored. Only a new game leaves this phase.
    GameComplete,
}

/// Bid and tricks being edited for one player in the current round.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct WorkingEntry {
    pub bid: u8,
    pub tricks: u8,
}

/// Per-round working data: nothing here is committed until the round completes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundState {
    /// 1-based round number.
    pub round_no: u8,
    /// Cards dealt this round; bids and tricks live in `0..=cards`.
    pub cards: u8,
    pub entries: Vec<WorkingEntry>,
    pub bonuses: BonusBoard,
}

impl RoundState {
    /// Fresh working data: every bid and trick count at 0, no bonuses.
    pub fn new(round_no: u8, cards: u8, players: usize) -> Self {
        Self {
            round_no,
            cards,
            entries: vec![WorkingEntry::default(); players],
            bonuses: BonusBoard::new(),
        }
    }

    pub fn in_range(&self, value: u8) -> bool {
        valid_bid_range(self.cards).contains(&value)
    }

    pub fn bids_in_range(&self) -> bool {
        self.entries.iter().all(|entry| self.in_range(entry.bid))
    }

    pub fn tricks_in_range(&self) -> bool {
        self.entries.iter().all(|entry| self.in_range(entry.tricks))
    }

    /// Score `player` would get if the round completed now.
    pub fn score_preview(&self, player: PlayerId) -> Option<i32> {
        let entry = self.entries.get(player)?;
        Some(score(
            entry.bid,
            entry.tricks,
            self.cards,
            self.bonuses.tally(player),
        ))
    }
}

/// Seat rotation helpers over a roster of `players` seats.
///
/// Positive deltas move forward through the roster, wrapping at the end.
#[inline]
pub fn seat_offset(seat: PlayerId, delta: isize, players: usize) -> PlayerId {
    if players == 0 {
        return 0;
    }
    let players = players as isize;
    (seat as isize + delta).rem_euclid(players) as PlayerId
}

#[inline]
pub fn next_player(seat: PlayerId, players: usize) -> PlayerId {
    seat_offset(seat, 1, players)
}

/// Starting player for a 1-based round number.
///
/// Round 1 → `first_start`, round 2 → `first_start + 1` (mod players), ...
#[inline]
pub fn starting_player_for_round(first_start: PlayerId, round_no: u8, players: usize) -> PlayerId {
    debug_assert!(round_no >= 1, "round_no is 1-based and must be >= 1");
    let steps = round_no.saturating_sub(1) as isize;
    seat_offset(first_start, steps, players)
}
