//! Error codes for the scorekeeper.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! printed by the CLI and carried in logs.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input Validation
    /// Bid outside `0..=cards`
    InvalidBid,
    /// Tricks outside `0..=cards`
    InvalidTricks,
    /// Round number outside the mode's schedule
    InvalidRound,
    /// Player index outside the roster
    InvalidPlayer,
    /// Roster would leave the 2..=8 range
    RosterSize,
    /// Blank player name
    EmptyPlayerName,
    /// Operation not allowed in the current phase
    PhaseMismatch,
    /// Bonus edits outside trick entry
    BonusNotAllowed,
    /// General validation error
    ValidationError,

    // Setup
    /// Mode or roster missing when a game is started
    SetupRequired,

    // Not Found
    PlayerNotFound,
    GameModeNotFound,
    NotFound,

    // System Errors
    StorageError,
    SerializationError,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBid => "INVALID_BID",
            Self::InvalidTricks => "INVALID_TRICKS",
            Self::InvalidRound => "INVALID_ROUND",
            Self::InvalidPlayer => "INVALID_PLAYER",
            Self::RosterSize => "ROSTER_SIZE",
            Self::EmptyPlayerName => "EMPTY_PLAYER_NAME",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::BonusNotAllowed => "BONUS_NOT_ALLOWED",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::SetupRequired => "SETUP_REQUIRED",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::GameModeNotFound => "GAME_MODE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::StorageError => "STORAGE_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const ALL: [ErrorCode; 16] = [
        ErrorCode::InvalidBid,
        ErrorCode::InvalidTricks,
        ErrorCode::InvalidRound,
        ErrorCode::InvalidPlayer,
        ErrorCode::RosterSize,
        ErrorCode::EmptyPlayerName,
        ErrorCode::PhaseMismatch,
        ErrorCode::BonusNotAllowed,
        ErrorCode::ValidationError,
        ErrorCode::SetupRequired,
        ErrorCode::PlayerNotFound,
        ErrorCode::GameModeNotFound,
        ErrorCode::NotFound,
        ErrorCode::StorageError,
        ErrorCode::SerializationError,
        ErrorCode::ConfigError,
    ];

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::InvalidBid.as_str(), "INVALID_BID");
        assert_eq!(ErrorCode::GameModeNotFound.as_str(), "GAME_MODE_NOT_FOUND");
        assert_eq!(ErrorCode::SetupRequired.to_string(), "SETUP_REQUIRED");
    }

    #[test]
    fn test_error_codes_unique_and_screaming_snake() {
        let mut seen = HashSet::new();
        for code in ALL {
            let s = code.as_str();
            assert!(seen.insert(s), "duplicate code {s}");
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "{s} is not SCREAMING_SNAKE_CASE"
            );
        }
    }
}
