//! Content module: the tournament store and its distribution.
//!
//! This module provides:
//! - Tournament data models and validation of required fields
//! - An in-memory [`ContentStore`] with add/update/remove and an edit-mode flag
//! - A listener registry notified after every successful mutation
//! - [`ContentProvider`], a clonable handle that shares one store and
//!   publishes snapshots over a `watch` channel
//! - Seed data (tournaments plus static site content)
//!
//! ## Example
//!
//! ```
//! use chess_registry::content::{ContentProvider, NewTournament, SeedData};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = ContentProvider::from_seed(SeedData::builtin(), true)?;
//!
//! let id = provider
//!     .add_tournament(NewTournament::new("Masters 2026", "Kuala Lumpur", "Feb 20-25, 2026"))
//!     .await?;
//!
//! assert_eq!(provider.get_tournament(id).await?.tournament.category, "Open");
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod models;
pub mod provider;
pub mod seed;
pub mod store;

pub use errors::{ContentError, ContentResult};
pub use models::{
    DEFAULT_CATEGORY, NewTournament, RequiredField, Tournament, TournamentId, TournamentPatch,
    TournamentRecord, TournamentStatus,
};
pub use provider::{ContentProvider, ContentSnapshot};
pub use seed::{ContactInfo, LearningTrack, Resource, SeedData, SeedError, SiteContent, SocialLink};
pub use store::{ContentChange, ContentEvent, ContentStore, Listener, SubscriptionId};
