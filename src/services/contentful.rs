use governor::{clock::DefaultClock, state::direct::NotKeyed, state::InMemoryState, Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, Result};

const API_TIMEOUT: Duration = Duration::from_secs(30);

/// Contentful GraphQL client. Sends parameterized queries and hands back
/// the raw `data` envelope; shaping is left to the loaders.
#[derive(Clone)]
pub struct ContentfulService {
    client: Client,
    endpoint: String,
    access_token: String,
    preview_access_token: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: &'a Value,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

impl ContentfulService {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(API_TIMEOUT)
            .gzip(true)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        // The preview API allows far fewer requests than delivery; stay under it
        let quota = Quota::per_second(nonzero!(10u32));

        Ok(Self {
            client,
            endpoint: config.graphql_endpoint(),
            access_token: config.contentful_access_token.clone(),
            preview_access_token: config.contentful_preview_access_token.clone(),
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    /// Run a query against the delivery API, or the preview API when
    /// `preview` is set, and return its `data` object
    pub async fn graphql(&self, query: &str, variables: Value, preview: bool) -> Result<Value> {
        self.rate_limiter.until_ready().await;

        let token = if preview {
            &self.preview_access_token
        } else {
            &self.access_token
        };

        tracing::debug!(preview, "Sending Contentful GraphQL query");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&GraphqlRequest {
                query,
                variables: &variables,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(AppError::ExternalApi(format!(
                "Contentful API error ({}): {}",
                status, error_text
            )));
        }

        let body: GraphqlResponse = response.json().await?;

        if !body.errors.is_empty() {
            let messages: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();
            return Err(AppError::ExternalApi(format!(
                "Contentful GraphQL errors: {}",
                messages.join("; ")
            )));
        }

        body.data
            .ok_or_else(|| AppError::ShapeMismatch("GraphQL response has no data".to_string()))
    }
}
