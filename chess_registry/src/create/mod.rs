//! Tournament creation flow.
//!
//! Models the create-tournament page as a small state machine over a
//! locally held [`TournamentForm`]. The flow is gated on the store's
//! edit-mode flag, validates required fields before submitting, waits a
//! fixed delay, then commits through the [`ContentProvider`].
//!
//! [`ContentProvider`]: crate::content::ContentProvider

pub mod flow;
pub mod form;

pub use flow::{
    CreateFlow, DEFAULT_SUBMIT_DELAY, FlowError, FlowResult, FlowState, Notice, NoticeKind,
};
pub use form::{DEFAULT_CONTINENT, DEFAULT_COUNTRY, FormField, TournamentForm};
