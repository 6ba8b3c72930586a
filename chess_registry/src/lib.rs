//! # Chess Registry
//!
//! Core of a chess tournament website: the tournament content store, the
//! page routing table, and the create-tournament flow.
//!
//! The crate has no HTTP dependency. A server builds one
//! [`ContentProvider`] at startup and hands clones of it to every view.
//!
//! ## Core Modules
//!
//! - [`content`]: Tournament models, content store, provider, seed data
//! - [`routing`]: Path-to-view resolution
//! - [`create`]: Create-tournament state machine
//!
//! ## Example
//!
//! ```
//! use chess_registry::{ContentProvider, Route, SeedData};
//!
//! let provider = ContentProvider::from_seed(SeedData::builtin(), false).unwrap();
//! assert!(!provider.snapshot().tournaments.is_empty());
//! assert_eq!(Route::resolve("/tournaments/create"), Route::CreateTournament);
//! ```

/// Tournament data, the content store and its provider.
pub mod content;
pub use content::{
    ContentError, ContentProvider, ContentResult, ContentSnapshot, ContentStore, NewTournament,
    SeedData, SiteContent, Tournament, TournamentId, TournamentPatch, TournamentRecord,
    TournamentStatus,
};

/// Create-tournament flow.
pub mod create;
pub use create::{CreateFlow, FlowError, FlowState, TournamentForm};

/// Page routing table.
pub mod routing;
pub use routing::Route;
