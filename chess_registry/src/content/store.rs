//! In-memory content store holding tournaments and the edit-mode flag.

use super::{
    errors::{ContentError, ContentResult},
    models::{NewTournament, Tournament, TournamentId, TournamentPatch, TournamentRecord},
};
use log::{debug, info};
use std::fmt;

/// Mutation that a listener is told about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEvent {
    TournamentAdded(TournamentId),
    TournamentUpdated(TournamentId),
    TournamentRemoved(TournamentId),
    EditingChanged(bool),
}

impl ContentEvent {
    /// Short label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            ContentEvent::TournamentAdded(_) => "tournament_added",
            ContentEvent::TournamentUpdated(_) => "tournament_updated",
            ContentEvent::TournamentRemoved(_) => "tournament_removed",
            ContentEvent::EditingChanged(_) => "editing_changed",
        }
    }

    pub fn tournament_id(&self) -> Option<TournamentId> {
        match self {
            ContentEvent::TournamentAdded(id)
            | ContentEvent::TournamentUpdated(id)
            | ContentEvent::TournamentRemoved(id) => Some(*id),
            ContentEvent::EditingChanged(_) => None,
        }
    }
}

/// State handed to listeners after a successful mutation.
///
/// Borrowed from the store, so listeners observe the post-mutation state.
#[derive(Debug, Clone, Copy)]
pub struct ContentChange<'a> {
    pub event: ContentEvent,
    pub tournaments: &'a [TournamentRecord],
    pub is_editing: bool,
}

/// Callback invoked after every successful mutation
pub type Listener = Box<dyn Fn(&ContentChange<'_>) + Send + Sync>;

/// Handle returned by [`ContentStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single source of truth for tournament data and the edit-mode flag
pub struct ContentStore {
    /// Tournaments in insertion order
    tournaments: Vec<TournamentRecord>,

    is_editing: bool,

    /// Next ID to assign; IDs are never reused
    next_id: TournamentId,

    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentStore")
            .field("tournaments", &self.tournaments)
            .field("is_editing", &self.is_editing)
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ContentStore {
    /// Create an empty store with edit mode off
    pub fn new() -> Self {
        Self {
            tournaments: Vec::new(),
            is_editing: false,
            next_id: 1,
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Create a store pre-populated with seed tournaments.
    ///
    /// Seed records receive IDs in order starting at 1. No listener is
    /// registered yet, so nothing is notified.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Validation` for the first seed record
    /// missing a required field.
    pub fn with_seed(
        tournaments: impl IntoIterator<Item = Tournament>,
        is_editing: bool,
    ) -> ContentResult<Self> {
        let mut store = Self::new();
        store.is_editing = is_editing;
        for tournament in tournaments {
            let missing = tournament.missing_fields();
            if !missing.is_empty() {
                return Err(ContentError::Validation { missing });
            }
            store.push(tournament);
        }
        Ok(store)
    }

    /// Current snapshot of tournaments, in insertion order
    pub fn tournaments(&self) -> &[TournamentRecord] {
        &self.tournaments
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    /// Look up a single tournament
    pub fn get_tournament(&self, id: TournamentId) -> ContentResult<&TournamentRecord> {
        self.tournaments
            .iter()
            .find(|record| record.id == id)
            .ok_or(ContentError::NotFound(id))
    }

    /// Append a new tournament and return its ID
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Validation` if `name`, `location` or `dates`
    /// is blank. The store is left unchanged.
    pub fn add_tournament(&mut self, data: NewTournament) -> ContentResult<TournamentId> {
        let missing = data.missing_fields();
        if !missing.is_empty() {
            debug!("Rejected tournament, missing {:?}", missing);
            return Err(ContentError::Validation { missing });
        }

        let id = self.push(data.into_tournament());
        info!("Tournament {} added", id);
        self.notify(ContentEvent::TournamentAdded(id));
        Ok(id)
    }

    /// Merge `patch` into the addressed tournament
    ///
    /// # Errors
    ///
    /// - `ContentError::NotFound` if `id` is absent
    /// - `ContentError::Validation` if the patch blanks a required field
    pub fn update_tournament(
        &mut self,
        id: TournamentId,
        patch: &TournamentPatch,
    ) -> ContentResult<&TournamentRecord> {
        let index = self.index_of(id)?;

        let merged = patch.apply_to(&self.tournaments[index].tournament);
        let missing = merged.missing_fields();
        if !missing.is_empty() {
            return Err(ContentError::Validation { missing });
        }

        self.tournaments[index].tournament = merged;
        info!("Tournament {} updated", id);
        self.notify(ContentEvent::TournamentUpdated(id));
        Ok(&self.tournaments[index])
    }

    /// Remove the addressed tournament and return it
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if `id` is absent, including when
    /// it was already removed.
    pub fn remove_tournament(&mut self, id: TournamentId) -> ContentResult<TournamentRecord> {
        let index = self.index_of(id)?;
        let removed = self.tournaments.remove(index);
        info!("Tournament {} removed", id);
        self.notify(ContentEvent::TournamentRemoved(id));
        Ok(removed)
    }

    /// Set the edit-mode flag. Always succeeds.
    pub fn set_editing(&mut self, flag: bool) {
        self.is_editing = flag;
        info!("Edit mode {}", if flag { "enabled" } else { "disabled" });
        self.notify(ContentEvent::EditingChanged(flag));
    }

    /// Register a listener invoked after each successful mutation
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Drop a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn push(&mut self, tournament: Tournament) -> TournamentId {
        let id = self.next_id;
        self.next_id += 1;
        self.tournaments.push(TournamentRecord { id, tournament });
        id
    }

    fn index_of(&self, id: TournamentId) -> ContentResult<usize> {
        self.tournaments
            .iter()
            .position(|record| record.id == id)
            .ok_or(ContentError::NotFound(id))
    }

    fn notify(&self, event: ContentEvent) {
        let change = ContentChange {
            event,
            tournaments: &self.tournaments,
            is_editing: self.is_editing,
        };
        for (_, listener) in &self.listeners {
            listener(&change);
        }
    }
}
