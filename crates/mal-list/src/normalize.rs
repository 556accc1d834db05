//! Reshaping raw list records into normalized items.
//!
//! Filtering happens before truncation, so a manga list full of novels still
//! yields up to [`LIST_LIMIT`] manga entries if the upstream page has them.

use crate::api::{RawAnimeEntry, RawMangaEntry};
use once_cell::sync::Lazy;
use regex::Regex;
use shared::{MediaKind, NormalizedItem, Progress, StatusInfo, StatusKind};
use tracing::debug;

/// Maximum items returned per list
pub const LIST_LIMIT: usize = 10;

/// Matches the CDN resize segment, e.g. `/r/192x272/` (ASCII digits only)
static RESIZE_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/r/[0-9]+x[0-9]+/").unwrap());

/// Clean a CDN image URL so it points at the large original
///
/// Strips the query string, removes the first resize segment and requests the
/// large variant by rewriting a trailing `.jpg` to `l.jpg`. Returns `None` for
/// a missing or empty URL.
pub fn process_image_url(url: Option<&str>) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;

    let without_query = url.split('?').next().unwrap_or_default();
    let unsized_url = RESIZE_SEGMENT.replace(without_query, "/");

    let cleaned = match unsized_url.strip_suffix(".jpg") {
        Some(stem) => format!("{}l.jpg", stem),
        None => unsized_url.to_string(),
    };
    Some(cleaned)
}

/// Maps raw records to [`NormalizedItem`]s for one deployment
#[derive(Debug, Clone)]
pub struct ListNormalizer {
    /// Site root prepended to relative entry links
    site_url: String,
    /// Image used when an entry has none
    placeholder_image: String,
}

impl ListNormalizer {
    pub fn new(site_url: impl Into<String>, placeholder_image: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            placeholder_image: placeholder_image.into(),
        }
    }

    fn image_or_placeholder(&self, path: Option<&str>) -> String {
        process_image_url(path)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| self.placeholder_image.clone())
    }

    fn entry_url(&self, path: Option<&str>) -> String {
        format!("{}{}", self.site_url, path.unwrap_or_default())
    }

    /// Truncate and map an anime list
    pub fn normalize_anime(&self, entries: Vec<RawAnimeEntry>) -> Vec<NormalizedItem> {
        entries
            .into_iter()
            .take(LIST_LIMIT)
            .map(|anime| {
                let code = anime.status.unwrap_or_default();
                NormalizedItem {
                    id: anime.anime_id,
                    title: anime.anime_title,
                    english_title: anime.anime_title_eng.unwrap_or_default(),
                    progress: Progress::Episodes {
                        episodes_watched: anime.num_watched_episodes.unwrap_or_default(),
                        total_episodes: anime.anime_num_episodes.unwrap_or_default(),
                    },
                    score: anime.score.unwrap_or_default(),
                    genres: None,
                    media_type: None,
                    url: self.entry_url(anime.anime_url.as_deref()),
                    status: StatusInfo::new(code, StatusKind::Anime),
                    image: self.image_or_placeholder(anime.anime_image_path.as_deref()),
                }
            })
            .collect()
    }

    /// Filter a manga list down to `kind`, then truncate and map it
    pub fn normalize_manga(&self, kind: MediaKind, entries: Vec<RawMangaEntry>) -> Vec<NormalizedItem> {
        let total = entries.len();
        let items: Vec<NormalizedItem> = entries
            .into_iter()
            .filter(|manga| kind.accepts(manga.manga_media_type_string.as_deref()))
            .take(LIST_LIMIT)
            .map(|manga| {
                let code = manga.status.unwrap_or_default();
                NormalizedItem {
                    id: manga.manga_id,
                    title: manga.manga_title,
                    english_title: manga.manga_english.unwrap_or_default(),
                    progress: Progress::Chapters {
                        chapters_read: manga.num_read_chapters.unwrap_or_default(),
                        total_chapters: manga.manga_num_chapters.unwrap_or_default(),
                    },
                    score: manga.score.unwrap_or_default(),
                    genres: Some(
                        manga
                            .genres
                            .unwrap_or_default()
                            .into_iter()
                            .map(|g| g.name)
                            .collect(),
                    ),
                    media_type: manga.manga_media_type_string,
                    url: self.entry_url(manga.manga_url.as_deref()),
                    status: StatusInfo::new(code, kind.status_kind()),
                    image: self.image_or_placeholder(manga.manga_image_path.as_deref()),
                }
            })
            .collect();

        debug!(kind = %kind, upstream = total, kept = items.len(), "Normalized manga list");
        items
    }
}
