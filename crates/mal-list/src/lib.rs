//! MAL list library for serving normalized MyAnimeList lists.
//!
//! This library fetches a user's public anime and manga lists from
//! MyAnimeList, reshapes them into [`shared::NormalizedItem`]s, and exposes
//! them over a small JSON API.

pub mod api;
pub mod error;
pub mod normalize;
pub mod server;

pub use api::MalClient;
pub use error::{ListApiError, UpstreamFetchError};
pub use normalize::{process_image_url, ListNormalizer, LIST_LIMIT};
pub use server::{bind_listener, build_router, AppState, ListService};
