//! MyAnimeList list client.

use super::types::*;
use crate::error::UpstreamFetchError;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::config::{ListQueryConfig, MalConfig};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the public `load.json` list endpoints
#[derive(Debug, Clone)]
pub struct MalClient {
    /// HTTP client
    client: Client,
    /// Tracking site base URL
    base_url: String,
    /// Account whose lists are fetched
    username: String,
    /// Query sent with every list request
    query: ListQueryConfig,
}

impl MalClient {
    /// Create a new client from the upstream configuration
    pub fn new(config: &MalConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            query: config.query.clone(),
        })
    }

    /// Tracking site base URL, used to absolutize entry links
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full `load.json` URL for a list (`animelist` or `mangalist`)
    pub fn list_url(&self, list: &str) -> String {
        format!(
            "{}/{}/{}/load.json?offset={}&order={}&status={}",
            self.base_url, list, self.username, self.query.offset, self.query.order, self.query.status
        )
    }

    /// Make a single GET request and decode the JSON array it returns
    async fn get_list<T: DeserializeOwned>(&self, list: &str) -> Result<Vec<T>, UpstreamFetchError> {
        let url = self.list_url(list);
        debug!(url = %url, "Fetching list");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| UpstreamFetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "List request failed");
            return Err(UpstreamFetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamFetchError::Request {
                url: url.clone(),
                source,
            })?;

        let entries: Vec<T> = serde_json::from_slice(&body)
            .map_err(|source| UpstreamFetchError::Decode { url: url.clone(), source })?;

        info!(list = list, entries = entries.len(), "List fetched");
        Ok(entries)
    }

    /// Fetch the anime list
    pub async fn fetch_anime_list(&self) -> Result<Vec<RawAnimeEntry>, UpstreamFetchError> {
        self.get_list("animelist").await
    }

    /// Fetch the manga list (manga, novels and everything else the site files under manga)
    pub async fn fetch_manga_list(&self) -> Result<Vec<RawMangaEntry>, UpstreamFetchError> {
        self.get_list("mangalist").await
    }
}
