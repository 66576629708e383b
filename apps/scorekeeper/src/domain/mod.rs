//! Domain layer: pure scoring rules, bonus bookkeeping and session types.

pub mod bonus;
pub mod game_modes;
pub mod game_transition;
pub mod roster;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_bonus;
#[cfg(test)]
mod tests_props_bonus;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_props_session;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use bonus::{BonusBoard, BonusTally, CounterBonus, ExclusiveBonus};
pub use game_modes::{find_mode, GameMode, GAME_MODES};
pub use roster::Roster;
pub use scoring::score;
pub use session::{GameSession, Player, RoundRecord, Standing};
pub use state::{Phase, PlayerId};
