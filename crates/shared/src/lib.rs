//! Shared library for the MAL shelf workspace.
//!
//! This crate provides common functionality used across the binary crates:
//! - Configuration management
//! - Logging infrastructure
//! - Normalized list models and media kinds
//! - Status code lookup tables

pub mod config;
pub mod logging;
pub mod models;
pub mod status;

// Re-export commonly used types
pub use config::{Config, ConfigOrigin};
pub use logging::LogConfig;
pub use models::*;
pub use status::{StatusInfo, StatusKind};
