//! Loader output as JSON props, for static builds and client-side fetches

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    error::Result,
    loaders::{self, AllShows, RadioPage, RadioPageSingle},
    models::{GenreCategoryShows, Page},
    state::AppState,
};

use super::preview_enabled;

#[derive(Deserialize)]
pub struct ShowsQuery {
    pub limit: Option<u32>,
}

#[derive(Deserialize)]
pub struct GenreCategoryQuery {
    #[serde(default)]
    pub skip: u32,
}

pub async fn all_shows(
    State(state): State<AppState>,
    Query(query): Query<ShowsQuery>,
    headers: HeaderMap,
) -> Result<Json<AllShows>> {
    let preview = preview_enabled(&state, &headers);
    let shows = loaders::get_all_shows(&state.cms, preview, query.limit).await?;
    Ok(Json(shows))
}

pub async fn radio_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RadioPage>> {
    let preview = preview_enabled(&state, &headers);
    let page = loaders::get_radio_page(&state.cms, preview, Utc::now()).await?;
    Ok(Json(page))
}

pub async fn radio_page_single(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Result<Json<RadioPageSingle>> {
    let preview = preview_enabled(&state, &headers);
    let data = loaders::get_radio_page_single(&state.cms, &slug, preview, Utc::now()).await?;
    Ok(Json(data))
}

/// Raw category traversal, duplicates included. Show dates are parsed on
/// the way in, so they come back as UTC RFC 3339 whatever offset the CMS
/// stored (`2024-02-01T20:00:00.000+01:00` is served as
/// `2024-02-01T19:00:00Z`).
pub async fn shows_by_genre_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<GenreCategoryQuery>,
    headers: HeaderMap,
) -> Result<Json<GenreCategoryShows>> {
    let preview = preview_enabled(&state, &headers);
    let traversal =
        loaders::get_shows_by_genre_category(&state.cms, preview, &category, query.skip).await?;
    Ok(Json(traversal))
}

pub async fn about_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Page>> {
    let preview = preview_enabled(&state, &headers);
    let page = loaders::get_about_page(&state.cms, preview).await?;
    Ok(Json(page))
}
