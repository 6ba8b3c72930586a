//! Page handlers.
//!
//! GET requests resolve through [`Route::resolve`] and render the matching
//! view inside the shell. The create page and the edit-mode toggle accept
//! form posts.

use super::{AppState, flow_error_status};
use crate::{
    logging, metrics,
    views::{self, Shell},
};
use axum::{
    Form,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderValue, Method, StatusCode, Uri, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use chess_registry::{
    CreateFlow, FlowError, FlowState, Route, TournamentForm, TournamentId, create::Notice,
};
use serde::Deserialize;
use std::time::Instant;

/// Query parameters understood by page routes
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// ID of a tournament committed by the redirecting form post
    pub created: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditModeForm {
    pub enabled: bool,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Wrap `body` in the shell and record the request
fn page_response(
    state: &AppState,
    route: Route,
    status: StatusCode,
    is_editing: bool,
    notice: Option<&Notice>,
    body: &str,
    started: Instant,
) -> Response {
    let html = views::layout(
        Shell {
            site_title: &state.site.title,
            route,
            is_editing,
            notice,
        },
        body,
    );

    metrics::page_views_total(route.as_str(), status.as_u16());
    logging::log_page_request(
        route.as_str(),
        status.as_u16(),
        started.elapsed().as_millis() as u64,
    );

    (status, Html(html)).into_response()
}

/// Success notice for a tournament committed by the previous request
async fn created_notice(state: &AppState, created: Option<&str>) -> Option<Notice> {
    let id: TournamentId = created?.parse().ok()?;
    let record = state.provider.get_tournament(id).await.ok()?;
    Some(Notice::committed(&record.tournament.name))
}

/// Render whichever view the request path resolves to
pub async fn render_page(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let started = Instant::now();
    let route = Route::resolve(uri.path());
    let snapshot = state.provider.snapshot();
    let site = state.provider.site();

    let mut notice = None;
    let (status, body) = match route {
        Route::Home => (StatusCode::OK, views::pages::home(site, &snapshot.tournaments)),
        Route::Tournaments => {
            // A malformed query only loses the notice
            let created = query.ok().and_then(|Query(query)| query.created);
            notice = created_notice(&state, created.as_deref()).await;
            (
                StatusCode::OK,
                views::pages::tournaments(&snapshot.tournaments, snapshot.is_editing),
            )
        }
        Route::CreateTournament => {
            let flow = CreateFlow::enter(snapshot.is_editing);
            (StatusCode::OK, views::pages::create_tournament(&flow))
        }
        Route::Learn => (StatusCode::OK, views::pages::learn(site)),
        Route::Resources => (StatusCode::OK, views::pages::resources(site)),
        Route::Contact => (StatusCode::OK, views::pages::contact(site)),
        Route::NotFound => (StatusCode::NOT_FOUND, views::pages::not_found(uri.path())),
    };

    page_response(
        &state,
        route,
        status,
        snapshot.is_editing,
        notice.as_ref(),
        &body,
        started,
    )
}

/// Handle the create-tournament form post.
///
/// # Response
///
/// - `303 See Other` to the registry after a commit, with the confirmation
///   view as body
/// - `403 Forbidden` with the access-denied view when edit mode is off
/// - `409 Conflict` with the disabled form while another submission is
///   still waiting to commit
/// - `422 Unprocessable Entity` with the form re-rendered, values kept,
///   when a required field is blank
pub async fn submit_tournament(
    State(state): State<AppState>,
    Form(form): Form<TournamentForm>,
) -> Response {
    let started = Instant::now();
    let is_editing = state.provider.is_editing().await;
    let mut flow = CreateFlow::enter(is_editing).with_submit_delay(state.site.submit_delay);

    if let Err(e) = flow.fill(form) {
        return submission_rejected(&state, &flow, e, is_editing, started);
    }

    let Ok(_in_flight) = state.submission.try_lock() else {
        // Show this form as pending; a blank field still reports as 422
        let err = match flow.begin_submit() {
            Ok(_) => FlowError::AlreadySubmitting,
            Err(e) => e,
        };
        return submission_rejected(&state, &flow, err, is_editing, started);
    };

    let target = match flow.submit(&state.provider).await {
        Ok(target) => target,
        Err(e) => return submission_rejected(&state, &flow, e, is_editing, started),
    };

    metrics::tournament_submissions_total("committed");
    logging::log_performance("tournament_submit", started.elapsed().as_millis() as u64);

    let query = match flow.state() {
        FlowState::Done { id } => format!("?created={id}"),
        _ => String::new(),
    };
    let location = format!("{}{query}", target.path().unwrap_or("/"));

    let mut response = page_response(
        &state,
        Route::CreateTournament,
        StatusCode::SEE_OTHER,
        is_editing,
        flow.notice(),
        &views::pages::create_tournament(&flow),
        started,
    );
    match HeaderValue::from_str(&location) {
        Ok(value) => {
            response.headers_mut().insert(header::LOCATION, value);
            response
        }
        Err(_) => Redirect::to(target.path().unwrap_or("/")).into_response(),
    }
}

/// Re-render the create page for a submission that did not commit
fn submission_rejected(
    state: &AppState,
    flow: &CreateFlow,
    err: FlowError,
    is_editing: bool,
    started: Instant,
) -> Response {
    let outcome = match err {
        FlowError::Gated => "gated",
        FlowError::Content(_) => "rejected",
        _ => "conflict",
    };
    metrics::tournament_submissions_total(outcome);
    tracing::info!(error = %err, outcome, "Tournament submission not committed");

    page_response(
        state,
        Route::CreateTournament,
        flow_error_status(&err),
        is_editing,
        flow.notice(),
        &views::pages::create_tournament(flow),
        started,
    )
}

/// Toggle admin edit mode and return to the page the toggle sat on
pub async fn toggle_edit_mode(
    State(state): State<AppState>,
    Form(form): Form<EditModeForm>,
) -> Redirect {
    state.provider.set_editing(form.enabled).await;
    tracing::info!(enabled = form.enabled, "Edit mode toggled");

    let target = form
        .return_to
        .as_deref()
        .map(Route::resolve)
        .and_then(|route| route.path())
        .unwrap_or("/");
    Redirect::to(target)
}
