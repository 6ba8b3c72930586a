//! Create-tournament flow state machine.
//!
//! ```text
//! Gated                         (edit mode off, only a return action)
//! Editing ──submit──► Submitting ──delay, add ok──► Done
//!    ▲  │ missing field      │
//!    │  └─ stays Editing     └──add failed──► Editing (values kept)
//! ```

use super::form::{FormField, TournamentForm};
use crate::content::{ContentError, ContentProvider, NewTournament, TournamentId, TournamentStatus};
use crate::routing::Route;
use log::{info, warn};
use std::time::Duration;
use thiserror::Error;

/// Delay applied before committing a submission
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Flow state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Edit mode is off
    Gated,
    /// Collecting form input
    Editing,
    /// Waiting out the submit delay; inputs disabled
    Submitting,
    /// Tournament committed
    Done { id: TournamentId },
}

impl FlowState {
    pub fn accepts_input(&self) -> bool {
        matches!(self, FlowState::Editing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// User-facing message raised by the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    /// Raised when a required field is blank
    pub fn missing_fields() -> Self {
        Self {
            kind: NoticeKind::Destructive,
            title: "Missing Intel".to_string(),
            description: "Tournament Name, Location, and Dates are required fields.".to_string(),
        }
    }

    /// Raised after a tournament is committed
    pub fn committed(name: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Registry Updated".to_string(),
            description: format!("{name} has been successfully committed to the database."),
        }
    }

    pub fn failed(err: &ContentError) -> Self {
        Self {
            kind: NoticeKind::Destructive,
            title: "Commit Failed".to_string(),
            description: err.to_string(),
        }
    }
}

/// Flow errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Admin edit mode is required to create tournaments")]
    Gated,

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("No submission is in progress")]
    NotSubmitting,

    #[error("Tournament {0} was already committed")]
    AlreadyCompleted(TournamentId),

    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Result type for flow operations
pub type FlowResult<T> = Result<T, FlowError>;

/// One pass through the create-tournament page
#[derive(Debug, Clone)]
pub struct CreateFlow {
    state: FlowState,
    form: TournamentForm,
    notice: Option<Notice>,
    submit_delay: Duration,
}

impl CreateFlow {
    /// Enter the flow; gated unless edit mode is on
    pub fn enter(is_editing: bool) -> Self {
        Self {
            state: if is_editing {
                FlowState::Editing
            } else {
                FlowState::Gated
            },
            form: TournamentForm::default(),
            notice: None,
            submit_delay: DEFAULT_SUBMIT_DELAY,
        }
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn form(&self) -> &TournamentForm {
        &self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Take the pending notice, leaving none
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> FlowResult<()> {
        self.ensure_editing()?;
        self.form.set(field, value);
        Ok(())
    }

    pub fn set_status(&mut self, status: TournamentStatus) -> FlowResult<()> {
        self.ensure_editing()?;
        self.form.status = status;
        Ok(())
    }

    /// Replace every field at once, as a posted HTML form does
    pub fn fill(&mut self, form: TournamentForm) -> FlowResult<()> {
        self.ensure_editing()?;
        self.form = form;
        Ok(())
    }

    /// Where the page's exit action leads, without committing anything
    pub fn return_route(&self) -> Route {
        match self.state {
            FlowState::Gated => Route::Home,
            _ => Route::Tournaments,
        }
    }

    /// `Editing → Submitting`.
    ///
    /// On a missing required field the flow stays in `Editing`, a
    /// validation notice is raised and the error is returned.
    pub fn begin_submit(&mut self) -> FlowResult<NewTournament> {
        self.ensure_editing()?;

        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            self.notice = Some(Notice::missing_fields());
            return Err(ContentError::Validation { missing }.into());
        }

        self.notice = None;
        self.state = FlowState::Submitting;
        Ok(self.form.to_new_tournament())
    }

    /// `Submitting → Done`, or back to `Editing` if the store rejects it.
    ///
    /// Waits out the submit delay, then commits `data`. On success the
    /// navigation target is returned.
    pub async fn complete_submit(
        &mut self,
        provider: &ContentProvider,
        data: NewTournament,
    ) -> FlowResult<Route> {
        if self.state != FlowState::Submitting {
            return Err(FlowError::NotSubmitting);
        }

        tokio::time::sleep(self.submit_delay).await;

        let name = data.name.clone();
        match provider.add_tournament(data).await {
            Ok(id) => {
                info!("Committed tournament {} ({})", id, name);
                self.state = FlowState::Done { id };
                self.notice = Some(Notice::committed(&name));
                Ok(Route::Tournaments)
            }
            Err(e) => {
                warn!("Tournament commit failed: {}", e);
                self.state = FlowState::Editing;
                self.notice = Some(Notice::failed(&e));
                Err(e.into())
            }
        }
    }

    /// Validate, wait, commit; returns the navigation target
    pub async fn submit(&mut self, provider: &ContentProvider) -> FlowResult<Route> {
        let data = self.begin_submit()?;
        self.complete_submit(provider, data).await
    }

    fn ensure_editing(&self) -> FlowResult<()> {
        match self.state {
            FlowState::Editing => Ok(()),
            FlowState::Gated => Err(FlowError::Gated),
            FlowState::Submitting => Err(FlowError::AlreadySubmitting),
            FlowState::Done { id } => Err(FlowError::AlreadyCompleted(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentStore, RequiredField, SiteContent};

    fn provider(is_editing: bool) -> ContentProvider {
        let mut store = ContentStore::new();
        store.set_editing(is_editing);
        ContentProvider::new(store, SiteContent::default())
    }

    fn filled_flow() -> CreateFlow {
        let mut flow = CreateFlow::enter(true).with_submit_delay(Duration::ZERO);
        flow.set_field(FormField::Name, "Masters 2026").unwrap();
        flow.set_field(FormField::Location, "Kuala Lumpur").unwrap();
        flow.set_field(FormField::Dates, "Feb 20-25, 2026").unwrap();
        flow
    }

    #[test]
    fn test_gated_when_edit_mode_off() {
        let mut flow = CreateFlow::enter(false);
        assert_eq!(flow.state(), FlowState::Gated);
        assert_eq!(flow.return_route(), Route::Home);
        assert_eq!(
            flow.set_field(FormField::Name, "x"),
            Err(FlowError::Gated)
        );
        assert_eq!(flow.begin_submit(), Err(FlowError::Gated));
    }

    #[test]
    fn test_missing_location_stays_editing() {
        let mut flow = filled_flow();
        flow.set_field(FormField::Location, "").unwrap();

        let err = flow.begin_submit().unwrap_err();
        assert_eq!(
            err,
            FlowError::Content(ContentError::Validation {
                missing: vec![RequiredField::Location]
            })
        );
        assert_eq!(flow.state(), FlowState::Editing);
        assert_eq!(flow.notice().unwrap().kind, NoticeKind::Destructive);
        assert_eq!(flow.form().name, "Masters 2026");
    }

    #[test]
    fn test_second_submit_rejected_while_submitting() {
        let mut flow = filled_flow();
        flow.begin_submit().unwrap();
        assert_eq!(flow.state(), FlowState::Submitting);
        assert_eq!(flow.begin_submit(), Err(FlowError::AlreadySubmitting));
        assert_eq!(
            flow.set_field(FormField::Name, "changed"),
            Err(FlowError::AlreadySubmitting)
        );
        assert_eq!(flow.return_route(), Route::Tournaments);
    }

    #[tokio::test]
    async fn test_submit_commits_and_navigates() {
        let provider = provider(true);
        let mut flow = filled_flow();

        let target = flow.submit(&provider).await.unwrap();

        assert_eq!(target, Route::Tournaments);
        let FlowState::Done { id } = flow.state() else {
            panic!("expected Done, got {:?}", flow.state());
        };
        let record = provider.get_tournament(id).await.unwrap();
        assert_eq!(record.tournament.country.as_deref(), Some("Malaysia"));
        assert_eq!(flow.notice().unwrap().kind, NoticeKind::Success);
        assert_eq!(
            flow.set_field(FormField::Name, "again"),
            Err(FlowError::AlreadyCompleted(id))
        );
    }

    #[tokio::test]
    async fn test_store_rejection_restores_editing() {
        let provider = provider(true);
        let mut flow = filled_flow();
        flow.begin_submit().unwrap();

        let err = flow
            .complete_submit(&provider, NewTournament::new("", "Ipoh", "May"))
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::Content(ContentError::Validation { .. })));
        assert_eq!(flow.state(), FlowState::Editing);
        assert_eq!(flow.form().location, "Kuala Lumpur");
        assert_eq!(flow.notice().unwrap().title, "Commit Failed");
        assert!(provider.tournaments().await.is_empty());
    }

    #[tokio::test]
    async fn test_complete_without_begin() {
        let provider = provider(true);
        let mut flow = filled_flow();
        let err = flow
            .complete_submit(&provider, NewTournament::new("A", "B", "C"))
            .await
            .unwrap_err();
        assert_eq!(err, FlowError::NotSubmitting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_delay() {
        let provider = provider(true);
        let mut flow = filled_flow().with_submit_delay(DEFAULT_SUBMIT_DELAY);

        let started = tokio::time::Instant::now();
        flow.submit(&provider).await.unwrap();

        assert!(started.elapsed() >= DEFAULT_SUBMIT_DELAY);
        assert_eq!(provider.tournaments().await.len(), 1);
    }
}
