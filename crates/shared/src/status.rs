//! List status lookup tables.
//!
//! MyAnimeList reports a user's list status as a small integer. The same code
//! means "Watching" on an anime list and "Reading" on a manga list, so label
//! and abbreviation lookups take a [`StatusKind`]. Colors depend on the code only.

use serde::{Deserialize, Serialize};

/// Color used for codes outside the known set (and for "plan to" entries)
pub const NEUTRAL_COLOR: &str = "#6b7280";

/// Wording family used for status labels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Anime,
    Manga,
}

/// Known list statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    InProgress,
    Completed,
    OnHold,
    Dropped,
    Planned,
}

impl ListStatus {
    /// Map an upstream status code, `None` for anything outside {1,2,3,4,6}
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(ListStatus::InProgress),
            2 => Some(ListStatus::Completed),
            3 => Some(ListStatus::OnHold),
            4 => Some(ListStatus::Dropped),
            6 => Some(ListStatus::Planned),
            _ => None,
        }
    }

    pub fn label(self, kind: StatusKind) -> &'static str {
        match (self, kind) {
            (ListStatus::InProgress, StatusKind::Anime) => "Watching",
            (ListStatus::InProgress, StatusKind::Manga) => "Reading",
            (ListStatus::Completed, _) => "Completed",
            (ListStatus::OnHold, _) => "On Hold",
            (ListStatus::Dropped, _) => "Dropped",
            (ListStatus::Planned, StatusKind::Anime) => "Plan to Watch",
            (ListStatus::Planned, StatusKind::Manga) => "Plan to Read",
        }
    }

    pub fn abbreviation(self, kind: StatusKind) -> &'static str {
        match (self, kind) {
            (ListStatus::InProgress, StatusKind::Anime) => "WAT",
            (ListStatus::InProgress, StatusKind::Manga) => "REA",
            (ListStatus::Completed, _) => "COM",
            (ListStatus::OnHold, _) => "HLD",
            (ListStatus::Dropped, _) => "DRP",
            (ListStatus::Planned, StatusKind::Anime) => "PTW",
            (ListStatus::Planned, StatusKind::Manga) => "PTR",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ListStatus::InProgress => "#22c55e", // green
            ListStatus::Completed => "#3b82f6",  // blue
            ListStatus::OnHold => "#eab308",     // yellow
            ListStatus::Dropped => "#ef4444",    // red
            ListStatus::Planned => NEUTRAL_COLOR,
        }
    }
}

/// Display label for a status code, "Unknown" for unrecognized codes
pub fn label(code: i64, kind: StatusKind) -> &'static str {
    ListStatus::from_code(code).map_or("Unknown", |s| s.label(kind))
}

/// Three-letter abbreviation for a status code, "UNK" for unrecognized codes
pub fn abbreviation(code: i64, kind: StatusKind) -> &'static str {
    ListStatus::from_code(code).map_or("UNK", |s| s.abbreviation(kind))
}

/// Display color for a status code
pub fn color(code: i64) -> &'static str {
    ListStatus::from_code(code).map_or(NEUTRAL_COLOR, ListStatus::color)
}

/// Status block attached to every normalized item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusInfo {
    pub code: i64,
    pub label: String,
    pub abv: String,
    pub color: String,
}

impl StatusInfo {
    pub fn new(code: i64, kind: StatusKind) -> Self {
        Self {
            code,
            label: label(code, kind).to_string(),
            abv: abbreviation(code, kind).to_string(),
            color: color(code).to_string(),
        }
    }
}
