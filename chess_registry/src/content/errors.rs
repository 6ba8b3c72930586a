//! Content store error types.

use super::models::{RequiredField, TournamentId};
use thiserror::Error;

/// Content store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// One or more required fields are blank
    #[error("Missing required fields: {}", join_fields(.missing))]
    Validation { missing: Vec<RequiredField> },

    /// No tournament with this ID
    #[error("Tournament not found: {0}")]
    NotFound(TournamentId),
}

impl ContentError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ContentError::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for content store operations
pub type ContentResult<T> = Result<T, ContentError>;
