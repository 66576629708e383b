//! Per-round bonus tallies and the single-holder rule for exclusive bonuses.
//!
//! The colour bonuses (green, yellow, purple, dark) and the Skull King capture
//! can be claimed by at most one player per round. Claiming one moves it away
//! from whoever held it. Special-card counters (treasure, mermaid, pirate) are
//! per-player and only bounded by their cap.
//!
//! [`BonusBoard`] carries no state beyond the tallies themselves: every
//! operation is a transformation of the map, computed on a copy and swapped in
//! as a whole.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::state::PlayerId;
use crate::errors::domain::DomainError;

/// Bonuses with at most one holder per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusiveBonus {
    Green,
    Yellow,
    Purple,
    Dark,
    SkullKing,
}

impl ExclusiveBonus {
    pub const ALL: [ExclusiveBonus; 5] = [
        ExclusiveBonus::Green,
        ExclusiveBonus::Yellow,
        ExclusiveBonus::Purple,
        ExclusiveBonus::Dark,
        ExclusiveBonus::SkullKing,
    ];

    pub const fn points(self) -> i32 {
        match self {
            ExclusiveBonus::Green | ExclusiveBonus::Yellow | ExclusiveBonus::Purple => 10,
            ExclusiveBonus::Dark => 20,
            ExclusiveBonus::SkullKing => 40,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ExclusiveBonus::Green => "green",
            ExclusiveBonus::Yellow => "yellow",
            ExclusiveBonus::Purple => "purple",
            ExclusiveBonus::Dark => "dark",
            ExclusiveBonus::SkullKing => "skull_king",
        }
    }
}

impl fmt::Display for ExclusiveBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExclusiveBonus {
    type Err = DomainError;

    /// Accepts snake_case, camelCase and the `...Bonus` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "green" | "greenbonus" => Ok(ExclusiveBonus::Green),
            "yellow" | "yellowbonus" => Ok(ExclusiveBonus::Yellow),
            "purple" | "purplebonus" => Ok(ExclusiveBonus::Purple),
            "dark" | "darkbonus" | "black" => Ok(ExclusiveBonus::Dark),
            "skullking" | "capture" => Ok(ExclusiveBonus::SkullKing),
            _ => Err(DomainError::validation_other(format!(
                "unknown exclusive bonus '{s}'"
            ))),
        }
    }
}

/// Special cards counted per player, each with a cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterBonus {
    Treasure,
    Mermaid,
    Pirate,
}

impl CounterBonus {
    pub const ALL: [CounterBonus; 3] = [
        CounterBonus::Treasure,
        CounterBonus::Mermaid,
        CounterBonus::Pirate,
    ];

    pub const fn cap(self) -> u8 {
        match self {
            CounterBonus::Treasure | CounterBonus::Mermaid => 2,
            CounterBonus::Pirate => 6,
        }
    }

    pub const fn points_each(self) -> i32 {
        match self {
            CounterBonus::Treasure | CounterBonus::Mermaid => 20,
            CounterBonus::Pirate => 30,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CounterBonus::Treasure => "treasure",
            CounterBonus::Mermaid => "mermaid",
            CounterBonus::Pirate => "pirate",
        }
    }

    /// Clamp an arbitrary value into `0..=cap`.
    pub fn clamp(self, value: i32) -> u8 {
        value.clamp(0, i32::from(self.cap())) as u8
    }
}

impl fmt::Display for CounterBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CounterBonus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "treasure" | "treasures" => Ok(CounterBonus::Treasure),
            "mermaid" | "mermaids" => Ok(CounterBonus::Mermaid),
            "pirate" | "pirates" => Ok(CounterBonus::Pirate),
            _ => Err(DomainError::validation_other(format!(
                "unknown special card '{s}'"
            ))),
        }
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// One player's bonus claims for the current round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BonusTally {
    green: bool,
    yellow: bool,
    purple: bool,
    dark: bool,
    treasure: u8,
    mermaid: u8,
    pirate: u8,
    skull_king: bool,
}

impl BonusTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(&self, flag: ExclusiveBonus) -> bool {
        match flag {
            ExclusiveBonus::Green => self.green,
            ExclusiveBonus::Yellow => self.yellow,
            ExclusiveBonus::Purple => self.purple,
            ExclusiveBonus::Dark => self.dark,
            ExclusiveBonus::SkullKing => self.skull_king,
        }
    }

    pub fn count(&self, kind: CounterBonus) -> u8 {
        match kind {
            CounterBonus::Treasure => self.treasure,
            CounterBonus::Mermaid => self.mermaid,
            CounterBonus::Pirate => self.pirate,
        }
    }

    /// Builder for a single tally. Exclusivity across players is the
    /// board's concern, not the tally's.
    pub fn with_flag(mut self, flag: ExclusiveBonus, on: bool) -> Self {
        self.put_flag(flag, on);
        self
    }

    /// Builder; the count is clamped to the card's cap.
    pub fn with_count(mut self, kind: CounterBonus, count: i32) -> Self {
        self.put_count(kind, kind.clamp(count));
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn put_flag(&mut self, flag: ExclusiveBonus, on: bool) {
        match flag {
            ExclusiveBonus::Green => self.green = on,
            ExclusiveBonus::Yellow => self.yellow = on,
            ExclusiveBonus::Purple => self.purple = on,
            ExclusiveBonus::Dark => self.dark = on,
            ExclusiveBonus::SkullKing => self.skull_king = on,
        }
    }

    fn put_count(&mut self, kind: CounterBonus, count: u8) {
        match kind {
            CounterBonus::Treasure => self.treasure = count,
            CounterBonus::Mermaid => self.mermaid = count,
            CounterBonus::Pirate => self.pirate = count,
        }
    }
}

/// Bonus tallies for every player in the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BonusBoard {
    tallies: BTreeMap<PlayerId, BonusTally>,
}

impl BonusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tally(&self, player: PlayerId) -> Option<&BonusTally> {
        self.tallies.get(&player)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &BonusTally)> {
        self.tallies.iter().map(|(player, tally)| (*player, tally))
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// The unique player currently holding `flag`, if any.
    pub fn holder_of(&self, flag: ExclusiveBonus) -> Option<PlayerId> {
        self.tallies
            .iter()
            .find(|(_, tally)| tally.flag(flag))
            .map(|(player, _)| *player)
    }

    /// Board with `flag` set to `on` for `player`. Turning a flag on first
    /// takes it away from its current holder.
    pub fn with_flag(&self, player: PlayerId, flag: ExclusiveBonus, on: bool) -> BonusBoard {
        let mut next = self.clone();
        if on {
            if let Some(holder) = next.holder_of(flag).filter(|holder| *holder != player) {
                if let Some(tally) = next.tallies.get_mut(&holder) {
                    tally.put_flag(flag, false);
                }
            }
            next.tallies.entry(player).or_default().put_flag(flag, true);
        } else if let Some(tally) = next.tallies.get_mut(&player) {
            tally.put_flag(flag, false);
        }
        next
    }

    pub fn set_flag(&mut self, player: PlayerId, flag: ExclusiveBonus, on: bool) {
        let next = self.with_flag(player, flag, on);
        debug_assert!(next.is_consistent(), "exclusive bonus held twice");
        *self = next;
    }

    /// Flip `flag` for `player`; returns the new state.
    pub fn toggle(&mut self, player: PlayerId, flag: ExclusiveBonus) -> bool {
        let on = !self.tally(player).is_some_and(|tally| tally.flag(flag));
        self.set_flag(player, flag, on);
        on
    }

    /// Board with `player`'s `kind` counter set to `value`, clamped.
    pub fn with_counter(&self, player: PlayerId, kind: CounterBonus, value: i32) -> BonusBoard {
        let mut next = self.clone();
        next.tallies
            .entry(player)
            .or_default()
            .put_count(kind, kind.clamp(value));
        next
    }

    /// Returns the stored (clamped) value.
    pub fn set_counter(&mut self, player: PlayerId, kind: CounterBonus, value: i32) -> u8 {
        *self = self.with_counter(player, kind, value);
        self.count(player, kind)
    }

    pub fn adjust_counter(&mut self, player: PlayerId, kind: CounterBonus, delta: i32) -> u8 {
        let current = i32::from(self.count(player, kind));
        self.set_counter(player, kind, current.saturating_add(delta))
    }

    /// Switch a counter between off (0) and claimed (at least 1).
    pub fn toggle_counter(&mut self, player: PlayerId, kind: CounterBonus) -> u8 {
        let next = if self.count(player, kind) > 0 { 0 } else { 1 };
        self.set_counter(player, kind, next)
    }

    pub fn count(&self, player: PlayerId, kind: CounterBonus) -> u8 {
        self.tally(player).map_or(0, |tally| tally.count(kind))
    }

    pub fn clear(&mut self) {
        self.tallies.clear();
    }

    /// Every exclusive flag has at most one holder.
    pub fn is_consistent(&self) -> bool {
        ExclusiveBonus::ALL.iter().all(|flag| {
            self.tallies
                .values()
                .filter(|tally| tally.flag(*flag))
                .count()
                <= 1
        })
    }
}
