use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::Friend;
use crate::services::suggestions::SuggestionProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RwLock<Roster>>,
    pub suggestions: Arc<dyn SuggestionProvider>,
}

impl AppState {
    /// Creates state with an empty roster and the given suggestion backend
    pub fn new(suggestions: Arc<dyn SuggestionProvider>) -> Self {
        Self {
            roster: Arc::new(RwLock::new(Roster::default())),
            suggestions,
        }
    }
}

/// One roster slot: a friend plus whether they participate in matching
pub struct RosterEntry {
    pub friend: Friend,
    pub selected: bool,
}

/// In-memory friend roster with selection flags
///
/// Entries keep insertion order so derived results stay deterministic
/// across repeated requests.
#[derive(Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Adds a friend, selected by default. Duplicate ids are rejected.
    pub fn add(&mut self, friend: Friend) -> AppResult<()> {
        if self.entries.iter().any(|entry| entry.friend.id == friend.id) {
            return Err(AppError::Conflict(format!(
                "Friend with id {} is already on the roster",
                friend.id
            )));
        }
        self.entries.push(RosterEntry {
            friend,
            selected: true,
        });
        Ok(())
    }

    /// Removes a friend by id
    pub fn remove(&mut self, id: &str) -> AppResult<()> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.friend.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No friend with id {}", id)))?;
        self.entries.remove(position);
        Ok(())
    }

    /// Sets whether a friend participates in matching
    pub fn set_selected(&mut self, id: &str, selected: bool) -> AppResult<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.friend.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No friend with id {}", id)))?;
        entry.selected = selected;
        Ok(())
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Snapshot of the currently selected friends, in roster order
    pub fn selected_friends(&self) -> Vec<Friend> {
        self.entries
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.friend.clone())
            .collect()
    }
}
