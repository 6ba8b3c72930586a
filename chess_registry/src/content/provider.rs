//! Shared handle that distributes one content store to every consumer.

use super::{
    errors::ContentResult,
    models::{NewTournament, TournamentId, TournamentPatch, TournamentRecord},
    seed::{SeedData, SiteContent},
    store::{ContentChange, ContentStore, Listener, SubscriptionId},
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{RwLock, watch};

/// Published state of the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSnapshot {
    /// Incremented once per successful mutation
    pub revision: u64,
    pub tournaments: Vec<TournamentRecord>,
    pub is_editing: bool,
}

/// Content provider.
///
/// Cheap to clone; every clone addresses the same store. Operations pass
/// straight through to [`ContentStore`], and a `watch` channel carries
/// a fresh [`ContentSnapshot`] after every successful mutation.
#[derive(Clone)]
pub struct ContentProvider {
    store: Arc<RwLock<ContentStore>>,

    /// Latest snapshot; the sender lives inside the store listener
    snapshots: watch::Receiver<ContentSnapshot>,

    site: Arc<SiteContent>,
}

impl ContentProvider {
    /// Wrap `store` and start publishing its changes
    pub fn new(mut store: ContentStore, site: SiteContent) -> Self {
        let (tx, rx) = watch::channel(ContentSnapshot {
            revision: 0,
            tournaments: store.tournaments().to_vec(),
            is_editing: store.is_editing(),
        });

        store.subscribe(Box::new(move |change: &ContentChange<'_>| {
            tx.send_modify(|snapshot| {
                snapshot.revision += 1;
                snapshot.tournaments = change.tournaments.to_vec();
                snapshot.is_editing = change.is_editing;
            });
        }));

        Self {
            store: Arc::new(RwLock::new(store)),
            snapshots: rx,
            site: Arc::new(site),
        }
    }

    /// Build the store from a seed
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Validation` if a seed tournament is missing a
    /// required field.
    pub fn from_seed(seed: SeedData, is_editing: bool) -> ContentResult<Self> {
        let store = ContentStore::with_seed(seed.tournaments, is_editing)?;
        Ok(Self::new(store, seed.site))
    }

    /// Static site content from the seed
    pub fn site(&self) -> &SiteContent {
        &self.site
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> ContentSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that wakes on every new snapshot
    pub fn subscribe(&self) -> watch::Receiver<ContentSnapshot> {
        self.snapshots.clone()
    }

    pub async fn tournaments(&self) -> Vec<TournamentRecord> {
        self.store.read().await.tournaments().to_vec()
    }

    pub async fn is_editing(&self) -> bool {
        self.store.read().await.is_editing()
    }

    pub async fn get_tournament(&self, id: TournamentId) -> ContentResult<TournamentRecord> {
        self.store.read().await.get_tournament(id).cloned()
    }

    pub async fn add_tournament(&self, data: NewTournament) -> ContentResult<TournamentId> {
        self.store.write().await.add_tournament(data)
    }

    pub async fn update_tournament(
        &self,
        id: TournamentId,
        patch: &TournamentPatch,
    ) -> ContentResult<TournamentRecord> {
        self.store
            .write()
            .await
            .update_tournament(id, patch)
            .cloned()
    }

    pub async fn remove_tournament(&self, id: TournamentId) -> ContentResult<TournamentRecord> {
        self.store.write().await.remove_tournament(id)
    }

    pub async fn set_editing(&self, flag: bool) {
        self.store.write().await.set_editing(flag);
    }

    /// Register a store listener
    pub async fn subscribe_events(&self, listener: Listener) -> SubscriptionId {
        self.store.write().await.subscribe(listener)
    }

    pub async fn unsubscribe_events(&self, id: SubscriptionId) -> bool {
        self.store.write().await.unsubscribe(id)
    }
}
