use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub contentful_graphql_url: String,
    pub contentful_space_id: String,
    pub contentful_environment: String,
    pub contentful_access_token: String,
    pub contentful_preview_access_token: String,
    pub contentful_preview_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            contentful_graphql_url: env::var("CONTENTFUL_GRAPHQL_URL")
                .unwrap_or_else(|_| "https://graphql.contentful.com".to_string()),
            contentful_space_id: env::var("CONTENTFUL_SPACE_ID")
                .context("CONTENTFUL_SPACE_ID must be set")?,
            contentful_environment: env::var("CONTENTFUL_ENVIRONMENT")
                .unwrap_or_else(|_| "master".to_string()),
            contentful_access_token: env::var("CONTENTFUL_ACCESS_TOKEN")
                .context("CONTENTFUL_ACCESS_TOKEN must be set")?,
            contentful_preview_access_token: env::var("CONTENTFUL_PREVIEW_ACCESS_TOKEN")
                .context("CONTENTFUL_PREVIEW_ACCESS_TOKEN must be set")?,
            contentful_preview_secret: env::var("CONTENTFUL_PREVIEW_SECRET").ok(),
        })
    }

    /// GraphQL endpoint for the configured space and environment
    pub fn graphql_endpoint(&self) -> String {
        format!(
            "{}/content/v1/spaces/{}/environments/{}",
            self.contentful_graphql_url.trim_end_matches('/'),
            self.contentful_space_id,
            self.contentful_environment
        )
    }

    /// Whether the supplied secret unlocks preview (draft) content
    pub fn is_preview_secret(&self, candidate: Option<&str>) -> bool {
        match (&self.contentful_preview_secret, candidate) {
            (Some(secret), Some(candidate)) => !secret.is_empty() && secret == candidate,
            _ => false,
        }
    }
}
