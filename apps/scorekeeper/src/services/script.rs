//! Scripted games: a JSON file listing every player's bid, tricks and bonus
//! claims per round, replayed through the round state machine.
//!
//! ```text
//! {
//!   "players": ["Anne", "Bartholomew"],
//!   "rounds": [
//!     [{ "bid": 0, "tricks": 0 }, { "bid": 1, "tricks": 1, "bonuses": ["skullKing"] }],
//!     [{ "bid": 1, "tricks": 2, "pirate": 1 }, { "bid": 0, "tricks": 0 }]
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::bonus::{CounterBonus, ExclusiveBonus};
use crate::domain::state::PlayerId;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::services::game_flow::GameFlow;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Overrides the saved roster when present.
    #[serde(default)]
    pub players: Option<Vec<String>>,
    pub rounds: Vec<Vec<ScriptEntry>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptEntry {
    pub bid: i32,
    pub tricks: i32,
    /// Exclusive bonuses claimed, e.g. `"green"` or `"skullKing"`.
    #[serde(default)]
    pub bonuses: Vec<String>,
    #[serde(default)]
    pub treasure: i32,
    #[serde(default)]
    pub mermaid: i32,
    #[serde(default)]
    pub pirate: i32,
}

impl ScriptEntry {
    fn counter(&self, kind: CounterBonus) -> i32 {
        match kind {
            CounterBonus::Treasure => self.treasure,
            CounterBonus::Mermaid => self.mermaid,
            CounterBonus::Pirate => self.pirate,
        }
    }
}

impl Script {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("cannot read script '{}': {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }
}

/// Play every scripted round. Stops early if the mode's last round is reached.
pub fn replay(script: &Script, mut flow: GameFlow) -> Result<GameFlow, AppError> {
    let players = flow.session().players().len();

    for (i, round) in script.rounds.iter().enumerate() {
        if flow.is_complete() {
            warn!(
                extra = script.rounds.len() - i,
                "Game already complete; ignoring remaining rounds"
            );
            break;
        }
        if round.len() != players {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayer,
                format!(
                    "round {} lists {} entries for {players} players",
                    flow.round_no(),
                    round.len()
                ),
            )
            .into());
        }

        for (player, entry) in round.iter().enumerate() {
            flow.update_bid(player, entry.bid)?;
        }
        flow.advance_to_tricks()?;

        for (player, entry) in round.iter().enumerate() {
            enter_tricks(&mut flow, player, entry)?;
        }

        let outcome = flow.complete_round()?;
        debug!(round = outcome.round_no, scores = ?outcome.scores, "Scripted round scored");
    }

    info!(
        rounds_played = flow.session().players().first().map_or(0, |p| p.rounds().len()),
        complete = flow.is_complete(),
        "Script finished"
    );
    Ok(flow)
}

fn enter_tricks(
    flow: &mut GameFlow,
    player: PlayerId,
    entry: &ScriptEntry,
) -> Result<(), AppError> {
    flow.update_tricks(player, entry.tricks)?;
    for name in &entry.bonuses {
        let flag: ExclusiveBonus = name.parse()?;
        flow.set_bonus(player, flag, true)?;
    }
    for kind in CounterBonus::ALL {
        let value = entry.counter(kind);
        if value != 0 {
            flow.set_counter(player, kind, value)?;
        }
    }
    Ok(())
}
