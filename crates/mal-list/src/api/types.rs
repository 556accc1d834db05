//! MyAnimeList `load.json` record types.
//!
//! These types represent the entries of the public list endpoints. Only the
//! id and title are required; everything else defaults when absent or null.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Titles such as "86" come back as JSON numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Entry from `/animelist/{user}/load.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAnimeEntry {
    pub anime_id: u64,
    #[serde(deserialize_with = "string_or_number")]
    pub anime_title: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub anime_title_eng: Option<String>,

    // User progress
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub num_watched_episodes: Option<u32>,
    #[serde(default)]
    pub anime_num_episodes: Option<u32>,

    // Links (relative to the site root)
    #[serde(default)]
    pub anime_url: Option<String>,
    #[serde(default)]
    pub anime_image_path: Option<String>,
}

/// Entry from `/mangalist/{user}/load.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMangaEntry {
    pub manga_id: u64,
    #[serde(deserialize_with = "string_or_number")]
    pub manga_title: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub manga_english: Option<String>,

    // User progress
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub num_read_chapters: Option<u32>,
    #[serde(default)]
    pub manga_num_chapters: Option<u32>,

    /// Manga, Manhwa, Manhua, Light Novel, Novel, One-shot, Doujinshi...
    #[serde(default)]
    pub manga_media_type_string: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,

    #[serde(default)]
    pub manga_url: Option<String>,
    #[serde(default)]
    pub manga_image_path: Option<String>,
}

/// Genre attached to a manga entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
}
