//! Chess tournament registry web server.
//!
//! Serves the registry pages rendered from a shared
//! [`ContentProvider`](chess_registry::ContentProvider), the create-tournament
//! form, and a JSON API over the same store.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod views;
