#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use adapters::{open_store, FileStore, MemoryStore};
pub use config::storage::{StorageConfig, StoreKind};
pub use domain::{
    find_mode, BonusTally, CounterBonus, ExclusiveBonus, GameMode, GameSession, Phase, PlayerId,
    Roster, RoundRecord, Standing, GAME_MODES,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use repos::{KeyValueStore, PLAYERS_STORAGE_KEY};
pub use services::game_flow::{GameFlow, MissingSetup, RoundOutcome, SetupRequired};
pub use services::roster::RosterService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
