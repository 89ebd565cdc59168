//! Integration tests for the page and props routes
//!
//! Tests the rendered HTML pages and JSON props endpoints including:
//! - Revalidation headers and ETags
//! - Preview mode via the secret header
//! - Not-found and upstream failure status codes
//! - Genre category paging

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use fake::{faker::lorem::en::Words, Fake};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::util::ServiceExt;
use wiremock::matchers::{body_partial_json, body_string_contains, header as header_matcher, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use radio_site::handlers::{self, PREVIEW_SECRET_HEADER};
use radio_site::state::AppState;
use radio_site::test_utils::*;

const LONG_AGO: &str = "2001-05-01T20:00:00.000Z";
const FAR_FUTURE: &str = "2999-05-01T20:00:00.000Z";

/// Helper to create a test router with page and API routes
fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(handlers::health::health_check))
        .nest("/api", handlers::api_routes())
        .merge(handlers::html_routes())
        .with_state(state.clone())
}

async fn body_string(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn get_with_preview(app: Router, uri: &str, secret: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(PREVIEW_SECRET_HEADER, secret)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn mount_query(server: &MockServer, operation: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(body_string_contains(operation))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_listing(server: &MockServer) {
    mount_query(
        server,
        "AllShowsQuery",
        collection_response(
            "showCollection",
            vec![
                show_json("next-week", FAR_FUTURE, &["Techno"], true),
                show_json("archive", LONG_AGO, &["Techno"], false),
                show_json("jazz-hour", LONG_AGO, &["Jazz"], false),
            ],
        ),
    )
    .await;
    mount_query(
        server,
        "AllGenreCategoriesQuery",
        collection_response("genreCategoryCollection", vec![json!({ "name": "Electronic" })]),
    )
    .await;
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_radio_page_renders_with_revalidation() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get(app, "/radio").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, s-maxage=300, stale-while-revalidate"
    );
    assert!(response.headers().contains_key(header::ETAG));

    let html = body_string(response).await;
    assert!(html.contains("href=\"/radio/next-week\""));
    assert!(html.contains("href=\"/radio/archive\""));
    assert!(html.contains("href=\"/radio/genres/Electronic\""));
    assert!(html.contains("Featured"));
}

#[tokio::test]
async fn test_radio_page_is_byte_identical_across_requests() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    let state = setup_test_app_state(&server.uri());

    let first = get(create_test_router(&state), "/radio").await;
    let second = get(create_test_router(&state), "/radio").await;

    let first_tag = first.headers()[header::ETAG].clone();
    assert_eq!(first_tag, second.headers()[header::ETAG]);
    assert_eq!(body_string(first).await, body_string(second).await);

    let response = create_test_router(&state)
        .oneshot(
            Request::builder()
                .uri("/radio")
                .header(header::IF_NONE_MATCH, first_tag)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
}

#[tokio::test]
async fn test_show_page_with_related() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    let title: Vec<String> = Words(2..4).fake();
    let title = title.join(" ");
    let mut show = show_json("next-week", FAR_FUTURE, &["Techno"], true);
    show["title"] = json!(title);
    show["content"] = rich_text_json("Live from the basement.");
    mount_query(
        &server,
        "RadioPageSingleQuery",
        collection_response("showCollection", vec![show]),
    )
    .await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get(app, "/radio/next-week").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains(&title));
    assert!(html.contains("<p>Live from the basement.</p>"));
    assert!(html.contains("Related Shows"));
    assert!(html.contains("href=\"/radio/archive\""));
    assert!(!html.contains("href=\"/radio/jazz-hour\""));
    assert!(html.contains("Listen on Mixcloud"));
}

#[tokio::test]
async fn test_unknown_show_is_404() {
    let server = MockServer::start().await;
    mount_query(
        &server,
        "RadioPageSingleQuery",
        collection_response("showCollection", vec![]),
    )
    .await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get(app, "/radio/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(body["details"].as_str().unwrap().contains("'nope'"));
}

#[tokio::test]
async fn test_upstream_failure_is_502() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get(app, "/radio").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_about_page_static_revalidation() {
    let server = MockServer::start().await;
    let mut page = json!({
        "title": "About",
        "subtitle": "Community radio since 2019",
        "coverImage": {
            "sys": { "id": "cover" },
            "title": "Studio",
            "description": null,
            "url": "https://images.ctfassets.net/studio.jpg",
            "width": 2000,
            "height": 1000
        }
    });
    page["content"] = rich_text_json("We play records.");
    mount_query(
        &server,
        "AboutPageQuery",
        collection_response("aboutPageCollection", vec![page]),
    )
    .await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get(app, "/about").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, s-maxage=86400, stale-while-revalidate"
    );
    let html = body_string(response).await;
    assert!(html.contains("Community radio since 2019"));
    assert!(html.contains("<p>We play records.</p>"));
}

#[tokio::test]
async fn test_preview_secret_switches_token_and_cache() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(header_matcher("authorization", format!("Bearer {}", TEST_PREVIEW_ACCESS_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_response(
            "aboutPageCollection",
            vec![json!({ "title": "Draft About" })],
        )))
        .expect(1)
        .mount(&server)
        .await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get_with_preview(app, "/about", TEST_PREVIEW_SECRET).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CACHE_CONTROL], "private, no-store");
    let html = body_string(response).await;
    assert!(html.contains("Draft About"));
    assert!(html.contains("Preview mode"));
}

#[tokio::test]
async fn test_wrong_preview_secret_serves_published() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(header_matcher("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str()))
        .and(body_partial_json(json!({ "variables": { "preview": false } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_response(
            "aboutPageCollection",
            vec![json!({ "title": "Published About" })],
        )))
        .expect(1)
        .mount(&server)
        .await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get_with_preview(app, "/about", "guess").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Published About"));
    assert!(!html.contains("Preview mode"));
}

#[tokio::test]
async fn test_preview_secret_in_query_string_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(header_matcher("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str()))
        .and(body_partial_json(json!({ "variables": { "preview": false } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_response(
            "aboutPageCollection",
            vec![json!({ "title": "Published About" })],
        )))
        .expect(1)
        .mount(&server)
        .await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get(app, &format!("/about?preview={}", TEST_PREVIEW_SECRET)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, s-maxage=86400, stale-while-revalidate"
    );
    assert_eq!(response.headers()[header::VARY], PREVIEW_SECRET_HEADER);
    let html = body_string(response).await;
    assert!(!html.contains("Preview mode"));
}

#[tokio::test]
async fn test_genre_page_dedups_and_pages() {
    let server = MockServer::start().await;
    let shared = show_json("shared", LONG_AGO, &["Techno", "House"], false);
    let full_page: Vec<Value> = (0..8)
        .map(|i| show_json(&format!("techno-{}", i), LONG_AGO, &["Techno"], false))
        .collect();
    let mut techno = full_page;
    techno[0] = shared.clone();

    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(body_partial_json(json!({ "variables": { "genre": "Electronic", "skip": 8 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "genreCategoryCollection": { "items": [{
                "name": "Electronic",
                "linkedFrom": { "genresCollection": { "items": [
                    { "name": "Techno", "linkedFrom": { "showCollection": { "items": techno } } },
                    { "name": "House", "linkedFrom": { "showCollection": { "items": [shared] } } }
                ]}}
            }]}}
        })))
        .expect(1)
        .mount(&server)
        .await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get(app, "/radio/genres/Electronic?page=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert_eq!(html.matches("href=\"/radio/shared\"").count(), 1);
    assert!(html.contains("/radio/genres/Electronic?page=1"));
    assert!(html.contains("/radio/genres/Electronic?page=3"));
}

#[tokio::test]
async fn test_unknown_genre_page_is_empty_not_error() {
    let server = MockServer::start().await;
    mount_query(
        &server,
        "ShowsByGenreCategoryQuery",
        collection_response("genreCategoryCollection", vec![]),
    )
    .await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get(app, "/radio/genres/Polka").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("No shows in this genre yet."));
}

#[tokio::test]
async fn test_api_radio_props() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get(app, "/api/radio").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["upcomingShows"][0]["slug"], "next-week");
    assert_eq!(body["pastShows"].as_array().unwrap().len(), 2);
    assert_eq!(body["featuredShows"][0]["slug"], "next-week");
    assert_eq!(body["genres"][0]["name"], "Electronic");
}

#[tokio::test]
async fn test_api_genre_category_keeps_duplicates() {
    let server = MockServer::start().await;
    let shared = show_json("shared", LONG_AGO, &["Techno", "House"], false);
    mount_query(
        &server,
        "ShowsByGenreCategoryQuery",
        json!({
            "data": { "genreCategoryCollection": { "items": [{
                "name": "Electronic",
                "linkedFrom": { "genresCollection": { "items": [
                    { "name": "Techno", "linkedFrom": { "showCollection": { "items": [shared.clone()] } } },
                    { "name": "House", "linkedFrom": { "showCollection": { "items": [shared] } } }
                ]}}
            }]}}
        }),
    )
    .await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get(app, "/api/radio/genres/Electronic").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    let genres = &body["genreCategoryCollection"]["items"][0]["linkedFrom"]["genresCollection"]["items"];
    assert_eq!(genres[0]["linkedFrom"]["showCollection"]["items"][0]["slug"], "shared");
    assert_eq!(genres[1]["linkedFrom"]["showCollection"]["items"][0]["slug"], "shared");
}

#[tokio::test]
async fn test_api_genre_category_serves_dates_in_utc() {
    let server = MockServer::start().await;
    let show = show_json("offset", "2024-02-01T20:00:00.000+01:00", &["Techno"], false);
    mount_query(
        &server,
        "ShowsByGenreCategoryQuery",
        json!({
            "data": { "genreCategoryCollection": { "items": [{
                "name": "Electronic",
                "linkedFrom": { "genresCollection": { "items": [
                    { "name": "Techno", "linkedFrom": { "showCollection": { "items": [show] } } }
                ]}}
            }]}}
        }),
    )
    .await;
    let app = create_test_router(&setup_test_app_state(&server.uri()));

    let response = get(app, "/api/radio/genres/Electronic").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    let date = body["genreCategoryCollection"]["items"][0]["linkedFrom"]["genresCollection"]["items"][0]
        ["linkedFrom"]["showCollection"]["items"][0]["date"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(date.ends_with('Z'));
    assert_eq!(
        chrono::DateTime::parse_from_rfc3339(&date).unwrap(),
        chrono::DateTime::parse_from_rfc3339("2024-02-01T19:00:00Z").unwrap()
    );
}
