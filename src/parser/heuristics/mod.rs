pub mod category;
pub mod characters;
pub mod reading;
pub mod summary;

use tracing::debug;

use crate::model::{Category, Character};
use crate::utils::word_count;

/// Everything the independent analyzers derive from one plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub word_count: usize,
    pub reading_time: String,
    pub age_category: String,
    pub category: Category,
    pub summary: String,
    pub characters: Vec<Character>,
}

pub fn analyze(text: &str) -> Metadata {
    let words = word_count(text);
    let metadata = Metadata {
        word_count: words,
        reading_time: reading::reading_time(words),
        age_category: reading::age_category(words).to_string(),
        category: category::detect_category(text),
        summary: summary::summarize(text),
        characters: characters::extract_characters(text),
    };
    debug!(
        words,
        category = %metadata.category,
        characters = metadata.characters.len(),
        "Analyzed text"
    );
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_gets_defaults() {
        let m = analyze("Hi there.");
        assert_eq!(m.word_count, 2);
        assert_eq!(m.reading_time, "~1 min");
        assert_eq!(m.age_category, "5–8");
        assert_eq!(m.category, category::DEFAULT_CATEGORY);
        assert_eq!(m.summary, summary::FALLBACK_SUMMARY);
        assert!(m.characters.is_empty());
    }

    #[test]
    fn analyzers_share_one_text() {
        let text = "Hans was a foolish boy who lived by the sea. Hans met Grete.";
        let m = analyze(text);
        assert_eq!(m.word_count, 13);
        assert_eq!(m.category, Category::Morality);
        assert_eq!(m.summary, "Hans was a foolish boy who lived by the sea.");
        let names: Vec<&str> = m.characters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Grete", "Hans"]);
    }
}
