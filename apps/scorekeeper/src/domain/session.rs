//! Game session store: the selected mode, the roster with each player's
//! round history, and who starts the current round.

use serde::Serialize;

use crate::domain::bonus::BonusTally;
use crate::domain::game_modes::GameMode;
use crate::domain::state::{next_player, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Outcome of one completed round for one player. Never edited once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    pub round_no: u8,
    pub bid: u8,
    pub tricks: u8,
    /// Bonus claims at the moment the round was scored, if any were made.
    pub bonuses: Option<BonusTally>,
    /// Cards dealt that round; not recoverable from the mode alone once the
    /// session is reset.
    pub cards: u8,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    total: i32,
    rounds: Vec<RoundRecord>,
}

impl Player {
    fn new(name: String) -> Self {
        Self {
            name,
            total: 0,
            rounds: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Running total, always the sum of `rounds()` scores.
    pub fn total(&self) -> i32 {
        self.total
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    fn push_round(&mut self, record: RoundRecord) {
        self.rounds.push(record);
        self.total = self.rounds.iter().map(|r| r.score).sum();
    }
}

/// One line of the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// 1-based position.
    pub rank: usize,
    pub player: PlayerId,
    pub name: String,
    pub total: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameSession {
    mode: Option<GameMode>,
    players: Vec<Player>,
    starting_player: PlayerId,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Option<&GameMode> {
        self.mode.as_ref()
    }

    /// Replace the mode. The roster is left alone.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = Some(mode);
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player)
    }

    /// Fresh roster: zero totals, empty histories, first player starts.
    pub fn set_players<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = names
            .into_iter()
            .map(|name| Player::new(name.into()))
            .collect();
        self.starting_player = 0;
    }

    /// Append a record and recompute that player's total from history.
    pub fn append_round_record(
        &mut self,
        player: PlayerId,
        record: RoundRecord,
    ) -> Result<(), DomainError> {
        let roster_len = self.players.len();
        let target = self.players.get_mut(player).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("player {player} not in roster of {roster_len}"),
            )
        })?;
        target.push_round(record);
        Ok(())
    }

    pub fn starting_player(&self) -> PlayerId {
        self.starting_player
    }

    /// Rotate the starting player by one; stays at 0 with no players.
    pub fn advance_starting_player(&mut self) {
        self.starting_player = next_player(self.starting_player, self.players.len());
    }

    /// Forget mode, roster and history.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Players ordered by total, highest first; ties keep roster order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut order: Vec<(PlayerId, &Player)> = self.players.iter().enumerate().collect();
        order.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        order
            .into_iter()
            .enumerate()
            .map(|(i, (player, p))| Standing {
                rank: i + 1,
                player,
                name: p.name.clone(),
                total: p.total,
            })
            .collect()
    }
}
