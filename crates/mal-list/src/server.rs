//! HTTP API serving normalized lists and the application shell.

use crate::api::MalClient;
use crate::error::{ListApiError, UpstreamFetchError};
use crate::normalize::ListNormalizer;
use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use shared::config::ServerConfig;
use shared::{Config, ErrorBody, MediaKind, NormalizedItem};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

/// Fetch, filter and normalize one media kind
#[derive(Debug, Clone)]
pub struct ListService {
    client: MalClient,
    normalizer: ListNormalizer,
}

impl ListService {
    pub fn new(client: MalClient, normalizer: ListNormalizer) -> Self {
        Self { client, normalizer }
    }

    /// Build the service from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = MalClient::new(&config.mal)?;
        let normalizer =
            ListNormalizer::new(client.base_url(), config.server.placeholder_image.clone());
        Ok(Self::new(client, normalizer))
    }

    /// Fetch the upstream list for `kind` and return at most [`LIST_LIMIT`](crate::normalize::LIST_LIMIT) items
    pub async fn list(&self, kind: MediaKind) -> Result<Vec<NormalizedItem>, UpstreamFetchError> {
        let items = match kind {
            MediaKind::Anime => {
                let entries = self.client.fetch_anime_list().await?;
                self.normalizer.normalize_anime(entries)
            }
            MediaKind::Manga | MediaKind::Novel => {
                let entries = self.client.fetch_manga_list().await?;
                self.normalizer.normalize_manga(kind, entries)
            }
        };

        info!(kind = %kind, items = items.len(), "Serving list");
        Ok(items)
    }
}

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub lists: Arc<ListService>,
}

impl AppState {
    pub fn new(lists: ListService) -> Self {
        Self {
            lists: Arc::new(lists),
        }
    }
}

async fn serve_list(
    state: &AppState,
    kind: MediaKind,
) -> Result<Json<Vec<NormalizedItem>>, ListApiError> {
    state
        .lists
        .list(kind)
        .await
        .map(Json)
        .map_err(|e| ListApiError::new(kind, e))
}

/// GET /api/animelist
pub async fn anime_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<NormalizedItem>>, ListApiError> {
    serve_list(&state, MediaKind::Anime).await
}

/// GET /api/mangalist
pub async fn manga_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<NormalizedItem>>, ListApiError> {
    serve_list(&state, MediaKind::Manga).await
}

/// GET /api/novellist
pub async fn novel_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<NormalizedItem>>, ListApiError> {
    serve_list(&state, MediaKind::Novel).await
}

async fn api_not_found() -> Response {
    let body = ErrorBody {
        error: "Not found".to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// Build application router
///
/// `/api/*` serves JSON; every other path is a static file from `static_dir`,
/// falling back to `index.html` so client-side routes load the shell.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let shell = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let api = Router::new()
        .route("/animelist", get(anime_list))
        .route("/mangalist", get(manga_list))
        .route("/novellist", get(novel_list))
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api)
        .fallback_service(shell)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured host and port
///
/// The host may be a name such as `localhost`; it is resolved rather than
/// parsed as a literal address.
pub async fn bind_listener(config: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind to {}:{}", config.host, config.port))
}
