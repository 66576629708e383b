//! Saved player names.
//!
//! The list is stored as a JSON array of strings. Anything unusable on read
//! (missing key, store failure, bad JSON, too few or too many names) yields
//! the default roster instead of an error.

use tracing::{debug, warn};

use super::{KeyValueStore, PLAYERS_STORAGE_KEY};
use crate::domain::roster::Roster;
use crate::error::AppError;

pub struct RosterRepo<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> RosterRepo<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved roster, or the default one.
    pub fn load_roster(&self) -> Roster {
        let raw = match self.store.get(PLAYERS_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = PLAYERS_STORAGE_KEY, "No saved players; using defaults");
                return Roster::default();
            }
            Err(e) => {
                warn!(
                    key = PLAYERS_STORAGE_KEY,
                    error = %e,
                    "Failed to read saved players; using defaults"
                );
                return Roster::default();
            }
        };

        let names: Vec<String> = match serde_json::from_str(&raw) {
            Ok(names) => names,
            Err(e) => {
                warn!(
                    key = PLAYERS_STORAGE_KEY,
                    error = %e,
                    "Saved players are not a name list; using defaults"
                );
                return Roster::default();
            }
        };

        let count = names.len();
        Roster::from_names(names).unwrap_or_else(|| {
            warn!(
                key = PLAYERS_STORAGE_KEY,
                count,
                "Saved roster size out of bounds; using defaults"
            );
            Roster::default()
        })
    }

    pub fn save_names(&mut self, names: &[String]) -> Result<(), AppError> {
        let raw = serde_json::to_string(names)?;
        self.store.set(PLAYERS_STORAGE_KEY, &raw)?;
        debug!(key = PLAYERS_STORAGE_KEY, count = names.len(), "Players saved");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
