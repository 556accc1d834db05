//! Text rendering of a loaded gallery.

use crate::client::Gallery;
use shared::{MediaKind, NormalizedItem};
use std::fmt::Write;

/// Shown instead of the gallery when any list fails to load
pub const ERROR_TEXT: &str = "Failed to load media lists.";

const TITLE: &str = "07gallery";
const SUBTITLE: &str = "My latest updates on different media.";

fn section_title(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Anime => "ANIME",
        MediaKind::Manga => "MANGA",
        MediaKind::Novel => "NOVEL",
    }
}

fn render_item(out: &mut String, item: &NormalizedItem) {
    let _ = write!(
        out,
        "  [{}] {}  {}",
        item.status.abv,
        item.title,
        item.progress.as_text()
    );
    // Unscored entries carry no badge
    if item.score > 0 {
        let _ = write!(out, "  ★ {}", item.score);
    }
    let _ = writeln!(out, "\n      {}", item.url);
}

/// Render all sections, in display order
pub fn render_gallery(gallery: &Gallery) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} | {}", TITLE, SUBTITLE);

    for (kind, items) in gallery.sections() {
        let _ = writeln!(out, "\n{}", section_title(kind));
        if items.is_empty() {
            out.push_str("  (nothing here yet)\n");
            continue;
        }
        for item in items {
            render_item(&mut out, item);
        }
    }

    out
}

/// Render the single error state
pub fn render_error() -> String {
    format!("{}\n", ERROR_TEXT)
}
