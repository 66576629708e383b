//! Game mode catalog: round counts and the cards dealt in each round.

use serde::Serialize;

/// How many cards are dealt in a given round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardSchedule {
    /// Round `r` deals `r` cards.
    Ascending,
    /// Every round deals the same hand.
    Fixed { cards: u8 },
    /// Rounds come in pairs: rounds 1 and 2 deal `first`, and each later
    /// pair moves by `step` cards.
    Paired { first: u8, step: i8 },
}

impl CardSchedule {
    fn cards_for(self, round_no: u8) -> u8 {
        match self {
            CardSchedule::Ascending => round_no,
            CardSchedule::Fixed { cards } => cards,
            CardSchedule::Paired { first, step } => {
                let pair = i16::from(round_no.saturating_sub(1) / 2);
                let cards = i16::from(first) + i16::from(step) * pair;
                u8::try_from(cards.max(0)).unwrap_or(u8::MAX)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameMode {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Total rounds, always at least 1.
    pub rounds: u8,
    pub schedule: CardSchedule,
}

impl GameMode {
    /// Cards dealt in `round_no` (1-based), or `None` outside `1..=rounds`.
    pub fn cards_per_round(&self, round_no: u8) -> Option<u8> {
        if round_no == 0 || round_no > self.rounds {
            return None;
        }
        Some(self.schedule.cards_for(round_no))
    }

    pub fn is_final_round(&self, round_no: u8) -> bool {
        round_no == self.rounds
    }
}

pub const CLASSIC: GameMode = GameMode {
    id: "classic",
    name: "Classic",
    description: "The traditional Skull King game with 10 rounds.",
    rounds: 10,
    schedule: CardSchedule::Ascending,
};

pub const NO_ODD_ROUNDS: GameMode = GameMode {
    id: "no-odd-rounds",
    name: "No Odd Rounds",
    description: "Two rounds of 2, 4, 6, 8, 10 cards.",
    rounds: 10,
    schedule: CardSchedule::Paired { first: 2, step: 2 },
};

pub const READY_TO_FIGHT: GameMode = GameMode {
    id: "ready-to-fight",
    name: "Ready to Fight",
    description: "5 rounds: 6, 7, 8, 9 and 10 cards.",
    rounds: 5,
    schedule: CardSchedule::Paired { first: 6, step: 1 },
};

pub const FLASH_ATTACK: GameMode = GameMode {
    id: "flash-attack",
    name: "Flash Attack",
    description: "5 rounds with 5 cards.",
    rounds: 5,
    schedule: CardSchedule::Fixed { cards: 5 },
};

pub const DAM_SHOOTING: GameMode = GameMode {
    id: "dam-shooting",
    name: "Dam Shooting",
    description: "10 rounds with 10 cards.",
    rounds: 10,
    schedule: CardSchedule::Fixed { cards: 10 },
};

pub const WHIRLWIND: GameMode = GameMode {
    id: "whirlwind",
    name: "Whirlwind",
    description: "Two round of 9, 7, 5, 3, and 1 card.",
    rounds: 10,
    schedule: CardSchedule::Paired { first: 9, step: -2 },
};

pub const BED_TIME: GameMode = GameMode {
    id: "bed-time",
    name: "Bed Time",
    description: "1 round with 1 card, then a goodnight kiss !",
    rounds: 1,
    schedule: CardSchedule::Fixed { cards: 1 },
};

pub const GAME_MODES: [GameMode; 7] = [
    CLASSIC,
    NO_ODD_ROUNDS,
    READY_TO_FIGHT,
    FLASH_ATTACK,
    DAM_SHOOTING,
    WHIRLWIND,
    BED_TIME,
];

pub fn find_mode(id: &str) -> Option<GameMode> {
    GAME_MODES.iter().copied().find(|mode| mode.id == id)
}
