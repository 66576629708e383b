use tracing::debug;

use super::GameFlow;
use crate::domain::bonus::{CounterBonus, ExclusiveBonus};
use crate::domain::state::{Phase, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

impl GameFlow {
    /// Set a player's bid. Out-of-range values leave the round unchanged.
    pub fn update_bid(&mut self, player: PlayerId, value: i32) -> Result<(), DomainError> {
        self.require_editable()?;
        self.require_player(player)?;
        let bid = self.checked_count(value, ValidationKind::InvalidBid, "Bid")?;

        let mut next = self.clone();
        next.round.entries[player].bid = bid;
        debug!(round = self.round.round_no, player, bid, "Bid updated");
        self.commit(next);
        Ok(())
    }

    /// Set a player's tricks won. Out-of-range values leave the round unchanged.
    pub fn update_tricks(&mut self, player: PlayerId, value: i32) -> Result<(), DomainError> {
        self.require_editable()?;
        self.require_player(player)?;
        let tricks = self.checked_count(value, ValidationKind::InvalidTricks, "Tricks")?;

        let mut next = self.clone();
        next.round.entries[player].tricks = tricks;
        debug!(round = self.round.round_no, player, tricks, "Tricks updated");
        self.commit(next);
        Ok(())
    }

    /// Flip an exclusive bonus for `player`, taking it from any other holder.
    /// Returns whether `player` now holds it.
    pub fn toggle_bonus(
        &mut self,
        player: PlayerId,
        flag: ExclusiveBonus,
    ) -> Result<bool, DomainError> {
        let on = !self
            .round
            .bonuses
            .tally(player)
            .is_some_and(|tally| tally.flag(flag));
        self.set_bonus(player, flag, on)?;
        Ok(on)
    }

    /// Claim (`on = true`) or release an exclusive bonus for `player`.
    pub fn set_bonus(
        &mut self,
        player: PlayerId,
        flag: ExclusiveBonus,
        on: bool,
    ) -> Result<(), DomainError> {
        self.require_bonus_entry()?;
        self.require_player(player)?;

        let previous = self.round.bonuses.holder_of(flag);
        let mut next = self.clone();
        next.round.bonuses.set_flag(player, flag, on);
        debug!(
            round = self.round.round_no,
            player,
            bonus = %flag,
            on,
            previous_holder = previous,
            "Bonus set"
        );
        self.commit(next);
        Ok(())
    }

    /// Add `delta` to a special-card counter, clamped to `0..=cap`.
    /// Returns the stored count.
    pub fn adjust_counter(
        &mut self,
        player: PlayerId,
        kind: CounterBonus,
        delta: i32,
    ) -> Result<u8, DomainError> {
        let current = i32::from(self.round.bonuses.count(player, kind));
        self.set_counter(player, kind, current.saturating_add(delta))
    }

    /// Set a special-card counter, clamped to `0..=cap`. Returns the stored count.
    pub fn set_counter(
        &mut self,
        player: PlayerId,
        kind: CounterBonus,
        value: i32,
    ) -> Result<u8, DomainError> {
        self.require_bonus_entry()?;
        self.require_player(player)?;

        let mut next = self.clone();
        let count = next.round.bonuses.set_counter(player, kind, value);
        debug!(round = self.round.round_no, player, card = %kind, count, "Counter set");
        self.commit(next);
        Ok(count)
    }

    /// Claim one of a special card, or clear the counter if any are claimed.
    pub fn toggle_counter(
        &mut self,
        player: PlayerId,
        kind: CounterBonus,
    ) -> Result<u8, DomainError> {
        let value = if self.round.bonuses.count(player, kind) > 0 { 0 } else { 1 };
        self.set_counter(player, kind, value)
    }

    fn require_editable(&self) -> Result<(), DomainError> {
        match self.phase {
            Phase::Bidding | Phase::TrickCounting => Ok(()),
            Phase::RoundComplete | Phase::GameComplete => Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Round is no longer editable",
            )),
        }
    }

    fn require_bonus_entry(&self) -> Result<(), DomainError> {
        if self.phase != Phase::TrickCounting {
            return Err(DomainError::validation(
                ValidationKind::BonusNotAllowed,
                "Bonuses are entered with tricks",
            ));
        }
        Ok(())
    }

    fn require_player(&self, player: PlayerId) -> Result<(), DomainError> {
        if player >= self.round.entries.len() {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayer,
                format!("No player at position {player}"),
            ));
        }
        Ok(())
    }

    fn checked_count(
        &self,
        value: i32,
        kind: ValidationKind,
        what: &str,
    ) -> Result<u8, DomainError> {
        u8::try_from(value)
            .ok()
            .filter(|v| self.round.in_range(*v))
            .ok_or_else(|| {
                debug!(round = self.round.round_no, value, "{what} out of range; ignored");
                DomainError::validation(
                    kind,
                    format!("{what} must be in range 0..={}", self.round.cards),
                )
            })
    }
}
