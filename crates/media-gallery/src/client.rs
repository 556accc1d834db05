//! List API client used by the gallery.

use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{MediaKind, NormalizedItem};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure loading one of the gallery lists
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("{kind} list request failed: {source}")]
    Request {
        kind: MediaKind,
        #[source]
        source: reqwest::Error,
    },

    #[error("{kind} list responded with status {status}")]
    Status { kind: MediaKind, status: u16 },

    #[error("{kind} list payload is not a list of items: {source}")]
    Decode {
        kind: MediaKind,
        #[source]
        source: serde_json::Error,
    },
}

impl GalleryError {
    pub fn kind(&self) -> MediaKind {
        match self {
            GalleryError::Request { kind, .. }
            | GalleryError::Status { kind, .. }
            | GalleryError::Decode { kind, .. } => *kind,
        }
    }
}

/// All three lists, loaded together
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gallery {
    pub anime: Vec<NormalizedItem>,
    pub manga: Vec<NormalizedItem>,
    pub novel: Vec<NormalizedItem>,
}

impl Gallery {
    /// Sections in display order
    pub fn sections(&self) -> [(MediaKind, &[NormalizedItem]); 3] {
        [
            (MediaKind::Anime, self.anime.as_slice()),
            (MediaKind::Manga, self.manga.as_slice()),
            (MediaKind::Novel, self.novel.as_slice()),
        ]
    }
}

/// Client for the local list API
#[derive(Debug, Clone)]
pub struct GalleryClient {
    client: Client,
    base_url: String,
}

impl GalleryClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Load a single list
    pub async fn fetch_list(&self, kind: MediaKind) -> Result<Vec<NormalizedItem>, GalleryError> {
        let url = format!("{}{}", self.base_url, kind.api_path());
        debug!(url = %url, "Loading list");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| GalleryError::Request { kind, source })?;

        let status = response.status();
        if !status.is_success() {
            warn!(kind = %kind, status = %status, "List endpoint failed");
            return Err(GalleryError::Status {
                kind,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| GalleryError::Request { kind, source })?;

        serde_json::from_slice(&body).map_err(|source| GalleryError::Decode { kind, source })
    }

    /// Load all three lists concurrently; the first failure fails the gallery
    pub async fn fetch_all(&self) -> Result<Gallery, GalleryError> {
        let (anime, manga, novel) = tokio::try_join!(
            self.fetch_list(MediaKind::Anime),
            self.fetch_list(MediaKind::Manga),
            self.fetch_list(MediaKind::Novel),
        )?;

        Ok(Gallery {
            anime,
            manga,
            novel,
        })
    }
}
