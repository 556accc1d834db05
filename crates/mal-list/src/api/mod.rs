//! MyAnimeList `load.json` client.
//!
//! This module provides a plain client for the public list endpoints and the
//! raw record types they return.

pub mod client;
pub mod types;

pub use client::MalClient;
pub use types::*;
