use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::model::{ChapterMap, FULL_STORY};

static CHAPTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(Chapter\s+\w+|CHAPTER\s+\w+)").unwrap());

/// Split plain text into chapters at each "Chapter X" / "CHAPTER X" marker.
///
/// A chapter runs from its marker to the next marker (or end of text). Labels
/// are the literal marker text, so a repeated label overwrites the earlier
/// chapter. Without markers the whole text is stored under [`FULL_STORY`].
pub fn split_chapters(text: &str) -> ChapterMap {
    let markers: Vec<_> = CHAPTER_RE.find_iter(text).collect();
    let mut chapters = ChapterMap::new();

    if markers.is_empty() {
        chapters.insert(FULL_STORY.to_string(), text.to_string());
        return chapters;
    }

    for (i, m) in markers.iter().enumerate() {
        let end = markers.get(i + 1).map(|next| next.start()).unwrap_or(text.len());
        let label = m.as_str().trim().to_string();
        let body = text[m.start()..end].trim().to_string();
        if chapters.insert(label.clone(), body).is_some() {
            warn!("Duplicate chapter label '{}', earlier chapter replaced", label);
        }
    }

    chapters
}

// ── Tests ──
