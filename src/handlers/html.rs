use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    error::Result,
    loaders::{self, GENRE_PAGE_SIZE},
    state::AppState,
    templates::{about_page, genre_category_page, radio_page, show_page},
};

use super::revalidate::{page_response, RADIO_REVALIDATE, STATIC_REVALIDATE};
use super::preview_enabled;

#[derive(Deserialize)]
pub struct GenrePageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

/// Radio landing page
pub async fn radio(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response> {
    let preview = preview_enabled(&state, &headers);
    let now = Utc::now();

    let page = loaders::get_radio_page(&state.cms, preview, now).await?;

    Ok(page_response(
        &headers,
        radio_page(&page, preview),
        RADIO_REVALIDATE,
        preview,
    ))
}

/// Single show page
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let preview = preview_enabled(&state, &headers);
    let now = Utc::now();

    let data = loaders::get_radio_page_single(&state.cms, &slug, preview, now).await?;

    Ok(page_response(
        &headers,
        show_page(&data, preview),
        RADIO_REVALIDATE,
        preview,
    ))
}

/// Shows filed under one genre category, eight per page
pub async fn genre_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<GenrePageQuery>,
    headers: HeaderMap,
) -> Result<Response> {
    let preview = preview_enabled(&state, &headers);
    let page = query.page.max(1);
    let skip = (page - 1).saturating_mul(GENRE_PAGE_SIZE);

    let traversal = loaders::get_shows_by_genre_category(&state.cms, preview, &category, skip).await?;

    let shows: Vec<_> = traversal.unique_shows().into_iter().cloned().collect();
    let title = traversal
        .category()
        .map(|c| c.name.as_str())
        .unwrap_or(category.as_str());

    Ok(page_response(
        &headers,
        genre_category_page(title, &shows, page, traversal.has_more(GENRE_PAGE_SIZE), preview),
        RADIO_REVALIDATE,
        preview,
    ))
}

/// About page
pub async fn about(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response> {
    let preview = preview_enabled(&state, &headers);

    let page = loaders::get_about_page(&state.cms, preview).await?;

    Ok(page_response(
        &headers,
        about_page(&page, preview),
        STATIC_REVALIDATE,
        preview,
    ))
}
