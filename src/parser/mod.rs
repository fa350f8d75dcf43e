pub mod chapters;
pub mod heuristics;
pub mod normalize;

use chrono::Datelike;
use tracing::info;

use crate::error::ExtractError;
use crate::model::{ChapterMap, StoryRecord};
use heuristics::Metadata;
use normalize::Normalized;

/// Output of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub record: StoryRecord,
    pub chapters: ChapterMap,
}

/// Full pipeline: markup → normalized text → {chapters, metadata} → record.
pub fn process_page(html: &str, url: &str) -> Result<Extraction, ExtractError> {
    process_page_in_year(html, url, chrono::Local::now().year())
}

pub fn process_page_in_year(html: &str, url: &str, year: i32) -> Result<Extraction, ExtractError> {
    let normalized = normalize::normalize(html, url)?;
    let chapters = chapters::split_chapters(&normalized.text);
    let metadata = heuristics::analyze(&normalized.text);
    info!(
        title = %normalized.title,
        words = metadata.word_count,
        chapters = chapters.len(),
        "Extracted story"
    );
    Ok(assemble(normalized, metadata, chapters, url, year))
}

pub fn assemble(
    normalized: Normalized,
    metadata: Metadata,
    chapters: ChapterMap,
    url: &str,
    year: i32,
) -> Extraction {
    let record = StoryRecord {
        title: normalized.title,
        author: normalized.author,
        year,
        category: metadata.category,
        cover_image: normalize::cover_image_url(url),
        link: url.to_string(),
        summary: metadata.summary,
        reading_time: metadata.reading_time,
        age_category: metadata.age_category,
        characters: metadata.characters,
    };
    Extraction { record, chapters }
}

// ── Tests ──
