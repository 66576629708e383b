use crate::domain::bonus::{BonusTally, CounterBonus, ExclusiveBonus};

/// Points for the bid alone.
///
/// Callers guarantee `bid <= cards` and `tricks <= cards`.
pub fn base_score(bid: u8, tricks: u8, cards: u8) -> i32 {
    let cards = i32::from(cards);
    if bid == 0 {
        return if tricks == 0 { 10 * cards } else { -10 * cards };
    }
    if bid == tricks {
        20 * i32::from(bid)
    } else {
        -10 * (i32::from(bid) - i32::from(tricks)).abs()
    }
}

/// Flat bonus points claimed in a tally.
pub fn bonus_contribution(tally: &BonusTally) -> i32 {
    let flags: i32 = ExclusiveBonus::ALL
        .iter()
        .filter(|flag| tally.flag(**flag))
        .map(|flag| flag.points())
        .sum();
    let cards: i32 = CounterBonus::ALL
        .iter()
        .map(|kind| i32::from(tally.count(*kind)) * kind.points_each())
        .sum();
    flags + cards
}

/// Round score for one player: base score plus any bonuses.
pub fn score(bid: u8, tricks: u8, cards: u8, bonuses: Option<&BonusTally>) -> i32 {
    base_score(bid, tricks, cards) + bonuses.map_or(0, bonus_contribution)
}
