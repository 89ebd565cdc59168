//! Cache headers for rendered pages. Each page declares how long a shared
//! cache may serve it before asking again; preview responses are never
//! cached.

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose, Engine as _};
use maud::Markup;
use sha2::{Digest, Sha256};
use std::time::Duration;

use super::PREVIEW_SECRET_HEADER;

/// Radio landing, show and genre pages
pub const RADIO_REVALIDATE: Duration = Duration::from_secs(60 * 5);

/// Static pages such as About
pub const STATIC_REVALIDATE: Duration = Duration::from_secs(60 * 60 * 24);

pub fn cache_control(revalidate: Duration, preview: bool) -> String {
    if preview {
        "private, no-store".to_string()
    } else {
        format!(
            "public, s-maxage={}, stale-while-revalidate",
            revalidate.as_secs()
        )
    }
}

/// Strong ETag over the exact bytes of a response body
pub fn etag(body: &[u8]) -> String {
    let digest = Sha256::digest(body);
    format!("\"{}\"", general_purpose::URL_SAFE_NO_PAD.encode(digest))
}

/// Build an HTML response with revalidation headers, answering 304 when the
/// client already holds the same bytes
pub fn page_response(
    request_headers: &HeaderMap,
    markup: Markup,
    revalidate: Duration,
    preview: bool,
) -> Response {
    let body = markup.into_string();
    let tag = etag(body.as_bytes());

    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&cache_control(revalidate, preview)) {
        headers.insert(header::CACHE_CONTROL, value);
    }
    if let Ok(value) = HeaderValue::from_str(&tag) {
        headers.insert(header::ETAG, value);
    }
    // shared caches must not hand a published page to a preview request
    headers.insert(header::VARY, HeaderValue::from_static(PREVIEW_SECRET_HEADER));

    let not_modified = !preview
        && request_headers
            .get(header::IF_NONE_MATCH)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|candidates| candidates.split(',').any(|c| c.trim() == tag));

    if not_modified {
        return (StatusCode::NOT_MODIFIED, headers).into_response();
    }

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    (StatusCode::OK, headers, body).into_response()
}
