//! Test utilities for Radio Site
//!
//! Provides helpers for:
//! - Show and genre fixtures for the pure loader logic
//! - CMS response bodies for mocked GraphQL endpoints
//! - Config and AppState factories pointed at a mock CMS

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::{
    config::Config,
    models::{Collection, Genre, GenreCategory, Show},
    services::ContentfulService,
    state::AppState,
};

pub const TEST_SPACE_ID: &str = "test-space";
pub const TEST_ACCESS_TOKEN: &str = "delivery-token";
pub const TEST_PREVIEW_ACCESS_TOKEN: &str = "preview-token";
pub const TEST_PREVIEW_SECRET: &str = "let-me-see-drafts";

/// GraphQL path for the test space, for matching requests on a mock server
pub fn graphql_path() -> String {
    format!("/content/v1/spaces/{}/environments/master", TEST_SPACE_ID)
}

/// Create a test configuration pointed at `base_url`
pub fn test_config(base_url: &str) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
        contentful_graphql_url: base_url.to_string(),
        contentful_space_id: TEST_SPACE_ID.to_string(),
        contentful_environment: "master".to_string(),
        contentful_access_token: TEST_ACCESS_TOKEN.to_string(),
        contentful_preview_access_token: TEST_PREVIEW_ACCESS_TOKEN.to_string(),
        contentful_preview_secret: Some(TEST_PREVIEW_SECRET.to_string()),
    }
}

/// Create a complete test AppState talking to the CMS at `base_url`
pub fn setup_test_app_state(base_url: &str) -> AppState {
    let config = test_config(base_url);
    let cms = ContentfulService::new(&config).expect("Failed to build Contentful client");

    AppState::new(cms, config)
}

pub fn genre_category(name: &str) -> GenreCategory {
    GenreCategory {
        name: name.to_string(),
    }
}

/// Create a bare show with the given genres
pub fn show_fixture(slug: &str, date: Option<DateTime<Utc>>, genres: &[&str]) -> Show {
    Show {
        title: format!("Show {}", slug),
        date,
        slug: slug.to_string(),
        mixcloud_link: None,
        is_featured: false,
        cover_image: None,
        artists_collection: Collection::default(),
        genres_collection: Collection {
            items: genres
                .iter()
                .map(|name| Genre {
                    name: name.to_string(),
                    genre_category: None,
                })
                .collect(),
        },
        content: None,
    }
}

/// A show item as the CMS returns it
pub fn show_json(slug: &str, date: &str, genres: &[&str], is_featured: bool) -> Value {
    json!({
        "title": format!("Show {}", slug),
        "date": date,
        "slug": slug,
        "mixcloudLink": format!("https://www.mixcloud.com/radio/{}/", slug),
        "isFeatured": is_featured,
        "coverImage": {
            "sys": { "id": format!("cover-{}", slug) },
            "title": format!("Cover for {}", slug),
            "description": null,
            "url": format!("https://images.ctfassets.net/test/{}.jpg", slug),
            "width": 1200,
            "height": 1200
        },
        "artistsCollection": {
            "items": [{ "name": "Resident DJ", "slug": "resident-dj", "city": { "name": "London" } }]
        },
        "genresCollection": {
            "items": genres.iter().map(|name| json!({ "name": name })).collect::<Vec<_>>()
        },
        "content": null
    })
}

/// Wrap collection items in a GraphQL response body
pub fn collection_response(key: &str, items: Vec<Value>) -> Value {
    let mut data = serde_json::Map::new();
    data.insert(key.to_string(), json!({ "items": items }));
    json!({ "data": data })
}

/// A one-paragraph rich text document
pub fn rich_text_json(text: &str) -> Value {
    json!({
        "json": {
            "nodeType": "document",
            "data": {},
            "content": [{
                "nodeType": "paragraph",
                "data": {},
                "content": [{ "nodeType": "text", "value": text, "marks": [], "data": {} }]
            }]
        },
        "links": { "assets": { "block": [] } }
    })
}
