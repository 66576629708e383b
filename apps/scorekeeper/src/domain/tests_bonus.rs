use crate::domain::bonus::{BonusBoard, CounterBonus, ExclusiveBonus};

#[test]
fn capture_claimed_in_turn_ends_with_one_holder() {
    let mut board = BonusBoard::new();
    board.set_flag(0, ExclusiveBonus::SkullKing, true);
    board.set_flag(1, ExclusiveBonus::SkullKing, true);

    assert_eq!(board.holder_of(ExclusiveBonus::SkullKing), Some(1));
    assert!(!board.tally(0).unwrap().flag(ExclusiveBonus::SkullKing));
    assert!(board.is_consistent());
}

#[test]
fn claiming_one_colour_leaves_the_others() {
    let mut board = BonusBoard::new();
    board.set_flag(0, ExclusiveBonus::Green, true);
    board.set_flag(1, ExclusiveBonus::Yellow, true);
    board.set_flag(1, ExclusiveBonus::Green, true);

    assert_eq!(board.holder_of(ExclusiveBonus::Green), Some(1));
    assert_eq!(board.holder_of(ExclusiveBonus::Yellow), Some(1));
    assert_eq!(board.holder_of(ExclusiveBonus::Purple), None);
}

#[test]
fn releasing_only_touches_the_releasing_player() {
    let mut board = BonusBoard::new();
    board.set_flag(2, ExclusiveBonus::Dark, true);
    board.set_flag(0, ExclusiveBonus::Dark, false);
    assert_eq!(board.holder_of(ExclusiveBonus::Dark), Some(2));
    assert!(board.tally(0).is_none());

    board.set_flag(2, ExclusiveBonus::Dark, false);
    assert_eq!(board.holder_of(ExclusiveBonus::Dark), None);
}

#[test]
fn toggle_flips_and_transfers() {
    let mut board = BonusBoard::new();
    assert!(board.toggle(0, ExclusiveBonus::Purple));
    assert!(board.toggle(1, ExclusiveBonus::Purple));
    assert_eq!(board.holder_of(ExclusiveBonus::Purple), Some(1));
    assert!(!board.toggle(1, ExclusiveBonus::Purple));
    assert_eq!(board.holder_of(ExclusiveBonus::Purple), None);
}

#[test]
fn with_flag_leaves_the_original_board_alone() {
    let mut board = BonusBoard::new();
    board.set_flag(0, ExclusiveBonus::SkullKing, true);
    let next = board.with_flag(1, ExclusiveBonus::SkullKing, true);
    assert_eq!(board.holder_of(ExclusiveBonus::SkullKing), Some(0));
    assert_eq!(next.holder_of(ExclusiveBonus::SkullKing), Some(1));
}

#[test]
fn counters_clamp_per_player() {
    let mut board = BonusBoard::new();
    assert_eq!(board.adjust_counter(0, CounterBonus::Treasure, 5), 2);
    assert_eq!(board.adjust_counter(0, CounterBonus::Treasure, -1), 1);
    assert_eq!(board.adjust_counter(1, CounterBonus::Pirate, 9), 6);
    assert_eq!(board.adjust_counter(1, CounterBonus::Pirate, -10), 0);
    assert_eq!(board.set_counter(1, CounterBonus::Mermaid, -4), 0);

    // Two players may both hold treasure.
    board.set_counter(1, CounterBonus::Treasure, 2);
    assert_eq!(board.count(0, CounterBonus::Treasure), 1);
    assert_eq!(board.count(1, CounterBonus::Treasure), 2);
}

#[test]
fn toggle_counter_switches_between_zero_and_one() {
    let mut board = BonusBoard::new();
    assert_eq!(board.toggle_counter(0, CounterBonus::Mermaid), 1);
    assert_eq!(board.toggle_counter(0, CounterBonus::Mermaid), 0);
    board.set_counter(0, CounterBonus::Pirate, 4);
    assert_eq!(board.toggle_counter(0, CounterBonus::Pirate), 0);
}

#[test]
fn clear_drops_every_tally() {
    let mut board = BonusBoard::new();
    board.set_flag(0, ExclusiveBonus::Green, true);
    board.set_counter(1, CounterBonus::Pirate, 2);
    board.clear();
    assert!(board.is_empty());
    assert_eq!(board.count(1, CounterBonus::Pirate), 0);
}
