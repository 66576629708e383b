use crate::domain::bonus::{BonusTally, CounterBonus, ExclusiveBonus};
use crate::domain::scoring::{base_score, bonus_contribution, score};

#[test]
fn zero_bid_made_scores_ten_per_card() {
    assert_eq!(score(0, 0, 1, None), 10);
    assert_eq!(score(0, 0, 7, None), 70);
}

#[test]
fn zero_bid_missed_loses_ten_per_card() {
    assert_eq!(score(0, 1, 3, None), -30);
    assert_eq!(score(0, 5, 5, None), -50);
}

#[test]
fn exact_bid_ignores_cards_dealt() {
    assert_eq!(score(2, 2, 2, None), 40);
    assert_eq!(score(2, 2, 10, None), 40);
}

#[test]
fn missed_bid_loses_ten_per_trick_off() {
    assert_eq!(score(3, 1, 5, None), -20);
    assert_eq!(score(1, 4, 5, None), -30);
}

#[test]
fn bonus_values_per_kind() {
    let cases = [
        (ExclusiveBonus::Green, 10),
        (ExclusiveBonus::Yellow, 10),
        (ExclusiveBonus::Purple, 10),
        (ExclusiveBonus::Dark, 20),
        (ExclusiveBonus::SkullKing, 40),
    ];
    for (flag, points) in cases {
        let tally = BonusTally::new().with_flag(flag, true);
        assert_eq!(bonus_contribution(&tally), points, "{flag}");
    }

    let cards = BonusTally::new()
        .with_count(CounterBonus::Treasure, 2)
        .with_count(CounterBonus::Mermaid, 1)
        .with_count(CounterBonus::Pirate, 3);
    assert_eq!(bonus_contribution(&cards), 40 + 20 + 90);
}

#[test]
fn bonuses_apply_even_when_bid_missed() {
    let tally = BonusTally::new().with_count(CounterBonus::Treasure, 1);
    assert_eq!(score(2, 0, 3, Some(&tally)), -20 + 20);
}

#[test]
fn empty_tally_scores_like_none() {
    assert_eq!(score(1, 1, 1, Some(&BonusTally::new())), score(1, 1, 1, None));
}

// Round 1, one card: bid 0 / took 0 is worth 10.
#[test]
fn first_round_zero_bid_made() {
    assert_eq!(score(0, 0, 1, None), 10);
}

// Same one-card round: bid 1 / took 1 is worth 20.
#[test]
fn first_round_single_bid_made() {
    assert_eq!(score(1, 1, 1, None), 20);
}

// Bid 2, took nothing, but captured with the dark bonus and one pirate.
#[test]
fn missed_bid_offset_by_dark_bonus_and_pirate() {
    let tally = BonusTally::new()
        .with_flag(ExclusiveBonus::Dark, true)
        .with_count(CounterBonus::Pirate, 1);
    assert_eq!(base_score(2, 0, 3), -20);
    assert_eq!(score(2, 0, 3, Some(&tally)), 30);
}
