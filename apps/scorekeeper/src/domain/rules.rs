use std::ops::RangeInclusive;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;

/// Legal bid and trick counts for a round dealing `cards` cards.
pub fn valid_bid_range(cards: u8) -> RangeInclusive<u8> {
    0..=cards
}

pub fn valid_roster_size(players: usize) -> bool {
    (MIN_PLAYERS..=MAX_PLAYERS).contains(&players)
}
