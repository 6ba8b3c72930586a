//! HTTP surface of the registry site.
//!
//! Server-rendered pages, the form endpoints they post to, and a versioned
//! JSON API over the same content store.
//!
//! # Endpoints Overview
//!
//! ## Pages
//! - `GET /`, `/tournaments`, `/tournaments/create`, `/learn`, `/resources`, `/contact`
//! - any other path renders the not-found page with `404`
//!
//! ## Forms
//! - `POST /tournaments/create` - Submit a new tournament (edit mode only)
//! - `POST /admin/edit-mode` - Toggle admin edit mode
//!
//! ## API v1
//! ```text
//! GET    /api/v1/tournaments           - List tournaments
//! POST   /api/v1/tournaments           - Add tournament
//! GET    /api/v1/tournaments/{id}      - Get tournament
//! PATCH  /api/v1/tournaments/{id}      - Update tournament
//! DELETE /api/v1/tournaments/{id}      - Remove tournament
//! GET    /api/v1/edit-mode             - Read edit mode
//! PUT    /api/v1/edit-mode             - Set edit mode
//! GET    /api/v1/content/stream        - Server-sent snapshot feed
//! ```
//!
//! ## Health Check
//! - `GET /health` - Server health status
//!
//! # CORS
//!
//! CORS is configured permissively for development.

pub mod pages;
pub mod request_id;
pub mod stream;
pub mod tournaments;

use crate::{config::SiteConfig, logging, metrics};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use chess_registry::{ContentError, ContentProvider, create::FlowError, content::ContentChange};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

/// Application state shared across all handlers.
///
/// Cloned per request; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub provider: ContentProvider,
    pub site: Arc<SiteConfig>,
    /// Held while a create-form submission waits out its delay; at most
    /// one submission is in flight per process
    pub submission: Arc<Mutex<()>>,
}

/// Build the application state and attach the mutation observer.
///
/// Every successful store mutation is logged and counted, and the active
/// tournament gauge follows the store size.
pub async fn build_state(provider: ContentProvider, site: SiteConfig) -> AppState {
    metrics::tournaments_active(provider.snapshot().tournaments.len());

    provider
        .subscribe_events(Box::new(|change: &ContentChange<'_>| {
            let kind = change.event.kind();
            logging::log_content_mutation(kind, change.event.tournament_id());
            metrics::content_mutations_total(kind);
            metrics::tournaments_active(change.tournaments.len());
        }))
        .await;

    AppState {
        provider,
        site: Arc::new(site),
        submission: Arc::new(Mutex::new(())),
    }
}

/// Create the complete router with all endpoints and middleware.
///
/// # Example
///
/// ```rust,no_run
/// # use cr_server::{api::{build_state, create_router}, config::SiteConfig};
/// # use chess_registry::{ContentProvider, SeedData};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = ContentProvider::from_seed(SeedData::builtin(), false)?;
/// let app = create_router(build_state(provider, SiteConfig::default()).await);
/// let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/tournaments/create",
            get(pages::render_page).post(pages::submit_tournament),
        )
        .route("/admin/edit-mode", post(pages::toggle_edit_mode))
        .nest("/api/v1", create_v1_router())
        // Every other path resolves through the page router, NotFound included
        .fallback(pages::render_page)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            "/tournaments",
            get(tournaments::list_tournaments).post(tournaments::create_tournament),
        )
        .route(
            "/tournaments/{tournament_id}",
            get(tournaments::get_tournament)
                .patch(tournaments::update_tournament)
                .delete(tournaments::remove_tournament),
        )
        .route(
            "/edit-mode",
            get(tournaments::get_edit_mode).put(tournaments::set_edit_mode),
        )
        .route("/content/stream", get(stream::content_stream))
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// JSON error response with the given status
pub fn error_response(status: StatusCode, error: impl ToString) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

/// Status code for a rejected store operation
pub fn content_error_status(err: &ContentError) -> StatusCode {
    match err {
        ContentError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ContentError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

/// Status code for a rejected create-flow step
pub fn flow_error_status(err: &FlowError) -> StatusCode {
    match err {
        FlowError::Gated => StatusCode::FORBIDDEN,
        FlowError::AlreadySubmitting
        | FlowError::NotSubmitting
        | FlowError::AlreadyCompleted(_) => StatusCode::CONFLICT,
        FlowError::Content(e) => content_error_status(e),
    }
}

/// Health check endpoint for monitoring and load balancers.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/health
/// # {"status":"healthy","version":"1.0.0","tournaments":5,"revision":0,"edit_mode":false,...}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.provider.snapshot();

    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "tournaments": snapshot.tournaments.len(),
        "revision": snapshot.revision,
        "edit_mode": snapshot.is_editing,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}
