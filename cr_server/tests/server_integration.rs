//! Integration tests for the HTTP server.
//!
//! Drives the full router with `oneshot` requests against an in-memory
//! provider seeded with the built-in content.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chess_registry::{ContentProvider, SeedData};
use cr_server::api::{build_state, create_router};
use cr_server::config::SiteConfig;
use http_body_util::BodyExt;
use std::time::Duration;
use tokio::time::timeout;
use tower::ServiceExt; // For `oneshot` method

/// Helper to create a test server over the built-in seed
async fn create_test_server(is_editing: bool) -> (axum::Router, ContentProvider) {
    create_test_server_with_delay(is_editing, Duration::ZERO).await
}

async fn create_test_server_with_delay(
    is_editing: bool,
    submit_delay: Duration,
) -> (axum::Router, ContentProvider) {
    let provider = ContentProvider::from_seed(SeedData::builtin(), is_editing).unwrap();
    let site = SiteConfig {
        submit_delay,
        ..SiteConfig::default()
    };
    let app = create_router(build_state(provider.clone(), site).await);
    (app, provider)
}

async fn get(app: &axum::Router, uri: &str) -> axum::response::Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn post_form(app: &axum::Router, uri: &str, body: &str) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: &str,
) -> axum::response::Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The page body without the shared header and footer
fn main_section(html: &str) -> &str {
    let start = html.find("<main>").unwrap();
    let end = html.find("</main>").unwrap();
    &html[start..end]
}

fn location(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

const MASTERS_FORM: &str = "name=Masters+2026&location=Kuala+Lumpur&dates=Feb+20-25%2C+2026\
                            &category=Open&status=Upcoming&link=&country=Malaysia&continent=Asia";

// ============================================================================
// Page Routing Tests
// ============================================================================

#[tokio::test]
async fn test_every_route_renders() {
    let (app, _) = create_test_server(false).await;

    for (path, marker) in [
        ("/", "data-route=\"home\""),
        ("/tournaments", "data-route=\"tournaments\""),
        ("/tournaments/create", "data-route=\"create_tournament\""),
        ("/learn", "data-route=\"learn\""),
        ("/resources", "data-route=\"resources\""),
        ("/contact", "data-route=\"contact\""),
    ] {
        let response = get(&app, path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert!(body_text(response).await.contains(marker), "{path}");
    }
}

#[tokio::test]
async fn test_unknown_path_renders_not_found() {
    let (app, _) = create_test_server(false).await;

    let response = get(&app, "/xyz123").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_text(response).await;
    assert!(body.contains("404 Page Not Found"));
    assert!(body.contains("/xyz123"));
}

#[tokio::test]
async fn test_trailing_slash_and_query_tolerated() {
    let (app, _) = create_test_server(false).await;

    assert_eq!(get(&app, "/learn/").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/learn?tab=openings").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/Learn").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_query_does_not_block_page() {
    let (app, _) = create_test_server(false).await;

    assert_eq!(
        get(&app, "/learn?created=1&created=2").await.status(),
        StatusCode::OK
    );
    assert_eq!(
        get(&app, "/xyz123?created=1&created=2").await.status(),
        StatusCode::NOT_FOUND
    );

    let response = get(&app, "/tournaments?created=1&created=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_text(response).await.contains("Registry Updated"));
}

#[tokio::test]
async fn test_post_to_plain_page_not_allowed() {
    let (app, _) = create_test_server(false).await;

    let response = post_form(&app, "/learn", "").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_tournaments_page_lists_seed() {
    let (app, provider) = create_test_server(false).await;

    let body = body_text(get(&app, "/tournaments").await).await;
    for record in provider.tournaments().await {
        assert!(body.contains(&format!("data-id=\"{}\"", record.id)));
    }
    assert!(!body.contains("New Tournament"));
}

// ============================================================================
// Create Tournament Flow Tests
// ============================================================================

#[tokio::test]
async fn test_gated_create_page() {
    let (app, _) = create_test_server(false).await;

    let body = body_text(get(&app, "/tournaments/create").await).await;
    let page = main_section(&body);
    assert!(page.contains("Access Denied"));
    assert!(!page.contains("<form"));
    assert!(!page.contains("<input"));
    assert!(!page.contains("<select"));
    assert_eq!(page.matches("<a ").count(), 1);
    assert!(page.contains("href=\"/\">Return to Base</a>"));
}

#[tokio::test]
async fn test_gated_submit_forbidden() {
    let (app, provider) = create_test_server(false).await;
    let before = provider.tournaments().await;

    let response = post_form(&app, "/tournaments/create", MASTERS_FORM).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(body_text(response).await.contains("Access Denied"));
    assert_eq!(provider.tournaments().await, before);
}

#[tokio::test]
async fn test_submit_commits_and_redirects() {
    let (app, provider) = create_test_server(true).await;
    let before = provider.tournaments().await.len();

    let response = post_form(&app, "/tournaments/create", MASTERS_FORM).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let target = location(&response);
    assert!(target.starts_with("/tournaments?created="));
    let confirmation = body_text(response).await;
    assert!(main_section(&confirmation).contains(&format!("href=\"{target}\"")));

    let tournaments = provider.tournaments().await;
    assert_eq!(tournaments.len(), before + 1);
    let added = tournaments.last().unwrap();
    assert_eq!(added.tournament.name, "Masters 2026");
    assert_eq!(added.tournament.dates, "Feb 20-25, 2026");
    assert_eq!(added.tournament.country.as_deref(), Some("Malaysia"));
    assert_eq!(added.tournament.link, None);

    let body = body_text(get(&app, &target).await).await;
    assert!(body.contains("Registry Updated"));
    assert!(body.contains("Masters 2026 has been successfully committed to the database."));
}

#[tokio::test]
async fn test_concurrent_submissions_commit_once() {
    let (app, provider) = create_test_server_with_delay(true, Duration::from_millis(300)).await;
    let before = provider.tournaments().await.len();

    let (first, second) = tokio::join!(
        post_form(&app, "/tournaments/create", MASTERS_FORM),
        post_form(&app, "/tournaments/create", MASTERS_FORM),
    );

    let mut statuses = [first.status(), second.status()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::SEE_OTHER, StatusCode::CONFLICT]);
    assert_eq!(provider.tournaments().await.len(), before + 1);

    let pending = if first.status() == StatusCode::CONFLICT {
        first
    } else {
        second
    };
    let body = body_text(pending).await;
    assert!(body.contains("<button type=\"submit\" disabled>Committing...</button>"));
    assert!(body.contains("value=\"Masters 2026\""));
}

#[tokio::test]
async fn test_submission_allowed_after_previous_commit() {
    let (app, provider) = create_test_server(true).await;
    let before = provider.tournaments().await.len();

    let first = post_form(&app, "/tournaments/create", MASTERS_FORM).await;
    let second = post_form(&app, "/tournaments/create", MASTERS_FORM).await;

    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(second.status(), StatusCode::SEE_OTHER);
    assert_eq!(provider.tournaments().await.len(), before + 2);
}

#[tokio::test]
async fn test_submit_missing_location_rerenders_form() {
    let (app, provider) = create_test_server(true).await;
    let before = provider.tournaments().await;

    let response = post_form(
        &app,
        "/tournaments/create",
        "name=Masters+2026&location=&dates=Feb+20-25%2C+2026&status=Ongoing",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_text(response).await;
    assert!(body.contains("Missing Intel"));
    assert!(body.contains("value=\"Masters 2026\""));
    assert!(body.contains("<option value=\"Ongoing\" selected>"));
    assert_eq!(provider.tournaments().await, before);
}

#[tokio::test]
async fn test_edit_mode_toggle_form() {
    let (app, provider) = create_test_server(false).await;

    let response = post_form(
        &app,
        "/admin/edit-mode",
        "enabled=true&return_to=%2Ftournaments%2Fcreate",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/tournaments/create");
    assert!(provider.is_editing().await);

    let body = body_text(get(&app, "/tournaments/create").await).await;
    assert!(body.contains("name=\"location\""));
    assert!(body.contains("Exit Edit Mode"));
}

#[tokio::test]
async fn test_edit_mode_toggle_unknown_return_goes_home() {
    let (app, _) = create_test_server(true).await;

    let response = post_form(&app, "/admin/edit-mode", "enabled=false&return_to=%2Fnowhere").await;
    assert_eq!(location(&response), "/");
}

// ============================================================================
// JSON API Tests
// ============================================================================

#[tokio::test]
async fn test_api_tournament_lifecycle() {
    let (app, _) = create_test_server(false).await;

    let response = send_json(
        &app,
        "POST",
        "/api/v1/tournaments",
        r#"{"name":"Penang Open","location":"George Town","dates":"Jul 3-7, 2026"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_u64().unwrap();
    let uri = format!("/api/v1/tournaments/{id}");

    let response = get(&app, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let record = body_json(response).await;
    assert_eq!(record["name"], "Penang Open");
    assert_eq!(record["category"], "Open");
    assert_eq!(record["status"], "Upcoming");

    let response = send_json(&app, "PATCH", &uri, r#"{"status":"Ongoing"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "Ongoing");

    let response = send_json(&app, "PATCH", &uri, r#"{"name":"  "}"#).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["error"].is_string());

    let response = send_json(&app, "DELETE", &uri, "").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(get(&app, &uri).await.status(), StatusCode::NOT_FOUND);
    let response = send_json(&app, "DELETE", &uri, "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_rejects_blank_required_field() {
    let (app, provider) = create_test_server(false).await;
    let before = provider.tournaments().await.len();

    let response = send_json(
        &app,
        "POST",
        "/api/v1/tournaments",
        r#"{"name":"Penang Open","location":"George Town","dates":""}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(provider.tournaments().await.len(), before);
}

#[tokio::test]
async fn test_api_list_matches_store() {
    let (app, provider) = create_test_server(false).await;

    let list = body_json(get(&app, "/api/v1/tournaments").await).await;
    assert_eq!(
        list.as_array().unwrap().len(),
        provider.tournaments().await.len()
    );
}

#[tokio::test]
async fn test_api_edit_mode() {
    let (app, provider) = create_test_server(false).await;

    let response = get(&app, "/api/v1/edit-mode").await;
    assert_eq!(body_json(response).await["enabled"], false);

    let response = send_json(&app, "PUT", "/api/v1/edit-mode", r#"{"enabled":true}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["enabled"], true);
    assert!(provider.is_editing().await);
}

#[tokio::test]
async fn test_content_stream_sends_current_snapshot() {
    let (app, _) = create_test_server(false).await;

    let response = get(&app, "/api/v1/content/stream").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/event-stream")
    );

    let mut body = response.into_body();
    let frame = timeout(Duration::from_secs(5), body.frame())
        .await
        .expect("first event should arrive")
        .unwrap()
        .unwrap();
    let data = String::from_utf8(frame.into_data().unwrap().to_vec()).unwrap();
    assert!(data.contains("event: snapshot"));
    assert!(data.contains("\"revision\":0"));
}

// ============================================================================
// Health And Middleware Tests
// ============================================================================

#[tokio::test]
async fn test_health_check_endpoint() {
    let (app, _) = create_test_server(false).await;

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let health = body_json(response).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["tournaments"], 5);
    assert_eq!(health["edit_mode"], false);
}

#[tokio::test]
async fn test_request_id_header() {
    let (app, _) = create_test_server(false).await;

    let response = get(&app, "/").await;
    assert!(response.headers().contains_key("x-request-id"));

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-42");
}
