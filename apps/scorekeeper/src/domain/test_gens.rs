// Proptest generators for domain types.
// Bids and tricks are generated against a card count so they are valid by
// construction rather than filtered.

use proptest::prelude::*;

use crate::domain::bonus::{BonusTally, CounterBonus, ExclusiveBonus};
use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};

/// Cards dealt in a round of any catalog mode.
pub fn cards() -> impl Strategy<Value = u8> {
    1u8..=10
}

/// `(cards, bid, tricks)` with bid and tricks in `0..=cards`.
pub fn round_entry() -> impl Strategy<Value = (u8, u8, u8)> {
    cards().prop_flat_map(|cards| (Just(cards), 0..=cards, 0..=cards))
}

pub fn exclusive_bonus() -> impl Strategy<Value = ExclusiveBonus> {
    prop::sample::select(ExclusiveBonus::ALL.to_vec())
}

pub fn counter_bonus() -> impl Strategy<Value = CounterBonus> {
    prop::sample::select(CounterBonus::ALL.to_vec())
}

/// Any tally a single player could hold, counts within their caps.
pub fn bonus_tally() -> impl Strategy<Value = BonusTally> {
    (
        prop::array::uniform5(any::<bool>()),
        0i32..=2,
        0i32..=2,
        0i32..=6,
    )
        .prop_map(|(flags, treasure, mermaid, pirate)| {
            let tally = ExclusiveBonus::ALL
                .iter()
                .zip(flags)
                .fold(BonusTally::new(), |tally, (flag, on)| tally.with_flag(*flag, on));
            tally
                .with_count(CounterBonus::Treasure, treasure)
                .with_count(CounterBonus::Mermaid, mermaid)
                .with_count(CounterBonus::Pirate, pirate)
        })
}

pub fn roster_size() -> impl Strategy<Value = usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

/// `(players, player)` with the player seated in the roster.
pub fn roster_and_player() -> impl Strategy<Value = (usize, usize)> {
    roster_size().prop_flat_map(|players| (Just(players), 0..players))
}
