//! Roster setup service: edits the name list and saves it after every change.

use tracing::{debug, info, warn};

use crate::domain::roster::Roster;
use crate::domain::session::GameSession;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::roster::RosterRepo;
use crate::repos::KeyValueStore;

pub struct RosterService<S: KeyValueStore> {
    repo: RosterRepo<S>,
    roster: Roster,
}

impl<S: KeyValueStore> RosterService<S> {
    /// Load the saved roster (or the defaults) from `store`.
    pub fn load(store: S) -> Self {
        let repo = RosterRepo::new(store);
        let roster = repo.load_roster();
        debug!(players = roster.len(), "Roster loaded");
        Self { repo, roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn names(&self) -> &[String] {
        self.roster.names()
    }

    /// Returns the new player's position.
    pub fn add_player(&mut self) -> Result<usize, DomainError> {
        let seat = self.roster.add_player()?;
        self.persist();
        Ok(seat)
    }

    /// Returns the removed name.
    pub fn remove_player(&mut self, seat: usize) -> Result<String, DomainError> {
        let name = self.roster.remove_player(seat)?;
        self.persist();
        Ok(name)
    }

    pub fn rename_player(
        &mut self,
        seat: usize,
        name: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.roster.rename_player(seat, name)?;
        self.persist();
        Ok(())
    }

    pub fn move_player(&mut self, from: usize, to: usize) -> Result<(), DomainError> {
        self.roster.move_player(from, to)?;
        self.persist();
        Ok(())
    }

    /// Back to "Player 1", "Player 2".
    pub fn reset(&mut self) {
        self.roster = Roster::default();
        self.persist();
    }

    /// Seat the roster in `session`. A mode must already be selected.
    pub fn start_game(&self, session: &mut GameSession) -> Result<(), AppError> {
        let Some(mode) = session.mode().copied() else {
            return Err(AppError::setup_required("choose a game mode first"));
        };
        let names = self.roster.validated_names()?;
        info!(mode = mode.id, players = names.len(), "Seating players");
        session.set_players(names);
        Ok(())
    }

    pub fn into_store(self) -> S {
        self.repo.into_store()
    }

    /// Saving is best-effort; the in-memory roster stays authoritative.
    fn persist(&mut self) {
        if let Err(e) = self.repo.save_names(self.roster.names()) {
            warn!(error = %e, "Failed to save players");
        }
    }
}
