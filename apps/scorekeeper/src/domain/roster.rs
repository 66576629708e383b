//! Player-name roster edited before a game starts.

use crate::domain::rules::{valid_roster_size, MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

pub fn default_player_name(seat_no: usize) -> String {
    format!("Player {seat_no}")
}

/// Ordered list of player names, kept within `MIN_PLAYERS..=MAX_PLAYERS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            names: (1..=MIN_PLAYERS).map(default_player_name).collect(),
        }
    }
}

impl Roster {
    /// Build from stored names; `None` when the count is out of bounds.
    pub fn from_names(names: Vec<String>) -> Option<Self> {
        valid_roster_size(names.len()).then_some(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Append "Player N" where N is the new roster size.
    pub fn add_player(&mut self) -> Result<usize, DomainError> {
        if self.names.len() >= MAX_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::RosterSize,
                format!("at most {MAX_PLAYERS} players"),
            ));
        }
        self.names.push(default_player_name(self.names.len() + 1));
        Ok(self.names.len() - 1)
    }

    pub fn remove_player(&mut self, seat: usize) -> Result<String, DomainError> {
        self.check_seat(seat)?;
        if self.names.len() <= MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::RosterSize,
                format!("at least {MIN_PLAYERS} players"),
            ));
        }
        Ok(self.names.remove(seat))
    }

    /// Names may be edited freely (including blank while typing); blanks are
    /// rejected only when the game starts.
    pub fn rename_player(&mut self, seat: usize, name: impl Into<String>) -> Result<(), DomainError> {
        self.check_seat(seat)?;
        self.names[seat] = name.into();
        Ok(())
    }

    /// Move the player at `from` to position `to`, shifting the others.
    pub fn move_player(&mut self, from: usize, to: usize) -> Result<(), DomainError> {
        self.check_seat(from)?;
        self.check_seat(to)?;
        let name = self.names.remove(from);
        self.names.insert(to, name);
        Ok(())
    }

    /// Names ready to seat, rejecting blank ones.
    pub fn validated_names(&self) -> Result<Vec<String>, DomainError> {
        if let Some(seat) = self.names.iter().position(|n| n.trim().is_empty()) {
            return Err(DomainError::validation(
                ValidationKind::EmptyPlayerName,
                format!("player {} has no name", seat + 1),
            ));
        }
        Ok(self.names.iter().map(|n| n.trim().to_string()).collect())
    }

    fn check_seat(&self, seat: usize) -> Result<(), DomainError> {
        if seat >= self.names.len() {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayer,
                format!("no player at position {seat}"),
            ));
        }
        Ok(())
    }
}
