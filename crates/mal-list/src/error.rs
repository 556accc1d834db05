//! Error types for upstream fetches and the list API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{ErrorBody, MediaKind};
use thiserror::Error;
use tracing::error;

/// Failure fetching a list from the tracking site
#[derive(Debug, Error)]
pub enum UpstreamFetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed list payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// List endpoint failure, rendered as a fixed 500 payload
#[derive(Debug, Error)]
#[error("failed to serve {kind} list")]
pub struct ListApiError {
    pub kind: MediaKind,
    #[source]
    pub source: UpstreamFetchError,
}

impl ListApiError {
    pub fn new(kind: MediaKind, source: UpstreamFetchError) -> Self {
        Self { kind, source }
    }

    /// Body returned to callers; never includes upstream details
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: format!("Failed to fetch data from MAL ({})", self.kind.display_name()),
        }
    }
}

impl IntoResponse for ListApiError {
    fn into_response(self) -> Response {
        error!(kind = %self.kind, error = %self.source, "Upstream list fetch failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self.body())).into_response()
    }
}
