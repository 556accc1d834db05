//! Data models for the project.
//!
//! This module defines the media kinds served by the list API and the
//! normalized item shape returned to the gallery, regardless of kind.

use crate::status::{StatusInfo, StatusKind};
use serde::{Deserialize, Serialize};

/// Media kind served by the list API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Anime,
    Manga,
    Novel,
}

impl MediaKind {
    /// Upstream list the records come from (`animelist` or `mangalist`)
    pub fn upstream_list(self) -> &'static str {
        match self {
            MediaKind::Anime => "animelist",
            MediaKind::Manga | MediaKind::Novel => "mangalist",
        }
    }

    /// Wording used for status labels
    pub fn status_kind(self) -> StatusKind {
        match self {
            MediaKind::Anime => StatusKind::Anime,
            MediaKind::Manga | MediaKind::Novel => StatusKind::Manga,
        }
    }

    /// Media types kept for this kind; `None` means no filtering
    pub fn allowed_media_types(self) -> Option<&'static [&'static str]> {
        match self {
            MediaKind::Anime => None,
            MediaKind::Manga => Some(&["Manga", "Manhwa", "Manhua"]),
            MediaKind::Novel => Some(&["Light Novel", "Novel"]),
        }
    }

    /// Whether a record with the given media type belongs to this kind
    pub fn accepts(self, media_type: Option<&str>) -> bool {
        match self.allowed_media_types() {
            None => true,
            Some(allowed) => media_type.is_some_and(|t| allowed.contains(&t)),
        }
    }

    /// Name used in error payloads
    pub fn display_name(self) -> &'static str {
        match self {
            MediaKind::Anime => "Anime",
            MediaKind::Manga => "Manga",
            MediaKind::Novel => "Novel",
        }
    }

    /// Path of the list endpoint on the local API
    pub fn api_path(self) -> &'static str {
        match self {
            MediaKind::Anime => "/api/animelist",
            MediaKind::Manga => "/api/mangalist",
            MediaKind::Novel => "/api/novellist",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Anime => write!(f, "anime"),
            MediaKind::Manga => write!(f, "manga"),
            MediaKind::Novel => write!(f, "novel"),
        }
    }
}

/// Progress through an entry, worded per kind on the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Progress {
    #[serde(rename_all = "camelCase")]
    Episodes {
        episodes_watched: u32,
        total_episodes: u32,
    },
    #[serde(rename_all = "camelCase")]
    Chapters {
        chapters_read: u32,
        total_chapters: u32,
    },
}

impl Progress {
    /// `done/total` as shown on the gallery overlay
    pub fn as_text(&self) -> String {
        match self {
            Progress::Episodes {
                episodes_watched,
                total_episodes,
            } => format!("{}/{}", episodes_watched, total_episodes),
            Progress::Chapters {
                chapters_read,
                total_chapters,
            } => format!("{}/{}", chapters_read, total_chapters),
        }
    }
}

/// Uniform list item returned by every list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItem {
    pub id: u64,
    pub title: String,
    pub english_title: String,
    #[serde(flatten)]
    pub progress: Progress,
    pub score: u32,

    // Manga and novel only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    pub url: String,
    pub status: StatusInfo,
    pub image: String,
}

/// Error payload returned by the list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
