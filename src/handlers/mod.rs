pub mod api;
pub mod health;
pub mod html;
pub mod revalidate;

use axum::{
    http::HeaderMap,
    response::Redirect,
    routing::get,
    Router,
};

use crate::state::AppState;

/// Header carrying the preview secret. It stays out of the URL so request
/// logs and shared links never contain it.
pub const PREVIEW_SECRET_HEADER: &str = "x-preview-secret";

/// Whether the request carries the preview secret and may see draft content
pub fn preview_enabled(state: &AppState, headers: &HeaderMap) -> bool {
    let secret = headers
        .get(PREVIEW_SECRET_HEADER)
        .and_then(|value| value.to_str().ok());
    let enabled = state.config.is_preview_secret(secret);
    if headers.contains_key(PREVIEW_SECRET_HEADER) && !enabled {
        tracing::warn!("Ignoring preview request with an invalid secret");
    }
    enabled
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(api::all_shows))
        .route("/radio", get(api::radio_page))
        .route("/radio/genres/:category", get(api::shows_by_genre_category))
        .route("/radio/:slug", get(api::radio_page_single))
        .route("/about", get(api::about_page))
}

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::permanent("/radio") }))
        .route("/radio", get(html::radio))
        .route("/radio/genres/:category", get(html::genre_category))
        .route("/radio/:slug", get(html::show))
        .route("/about", get(html::about))
}
