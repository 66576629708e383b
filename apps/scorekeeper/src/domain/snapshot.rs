//! Public snapshot API for rendering the current round without exposing internals.

use serde::Serialize;

use crate::domain::bonus::{BonusTally, ExclusiveBonus};
use crate::domain::session::{GameSession, Standing};
use crate::domain::state::{Phase, PlayerId, RoundState};

/// One player's row in the current round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerRow {
    pub player: PlayerId,
    pub name: String,
    pub bid: u8,
    pub tricks: u8,
    /// Score the round would give if completed now.
    pub score_preview: i32,
    /// Running total before this round.
    pub total: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonuses: Option<BonusTally>,
    pub is_starting_player: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BonusHolder {
    pub bonus: ExclusiveBonus,
    pub player: PlayerId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub mode_id: &'static str,
    pub round_no: u8,
    pub total_rounds: u8,
    pub cards: u8,
    pub phase: Phase,
    pub starting_player: PlayerId,
    pub can_advance_bids: bool,
    pub can_complete_round: bool,
    pub players: Vec<PlayerRow>,
    pub bonus_holders: Vec<BonusHolder>,
    pub standings: Vec<Standing>,
}

impl RoundSnapshot {
    pub fn build(
        mode_id: &'static str,
        total_rounds: u8,
        session: &GameSession,
        round: &RoundState,
        phase: Phase,
    ) -> Self {
        let players = session
            .players()
            .iter()
            .enumerate()
            .map(|(player, p)| {
                let entry = round.entries.get(player).copied().unwrap_or_default();
                PlayerRow {
                    player,
                    name: p.name().to_string(),
                    bid: entry.bid,
                    tricks: entry.tricks,
                    score_preview: round.score_preview(player).unwrap_or(0),
                    total: p.total(),
                    bonuses: round.bonuses.tally(player).copied(),
                    is_starting_player: player == session.starting_player(),
                }
            })
            .collect();
        let bonus_holders = ExclusiveBonus::ALL
            .iter()
            .filter_map(|bonus| {
                round.bonuses.holder_of(*bonus).map(|player| BonusHolder {
                    bonus: *bonus,
                    player,
                })
            })
            .collect();

        Self {
            mode_id,
            round_no: round.round_no,
            total_rounds,
            cards: round.cards,
            phase,
            starting_player: session.starting_player(),
            can_advance_bids: phase == Phase::Bidding && round.bids_in_range(),
            can_complete_round: phase == Phase::TrickCounting && round.tricks_in_range(),
            players,
            bonus_holders,
            standings: session.standings(),
        }
    }
}
