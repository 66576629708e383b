//! Repository traits for the persistence seam.

pub mod roster;

use crate::error::AppError;

/// Key under which the ordered player-name list is stored.
pub const PLAYERS_STORAGE_KEY: &str = "skullKingPlayers";

/// String key-value persistence. Values are opaque to the store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set(key, value)
    }
}
