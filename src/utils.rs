use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

static NON_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Lowercase, hyphenated, URL-safe form of a title.
pub fn slugify(text: &str) -> String {
    NON_SLUG_RE
        .replace_all(&text.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Slug for a story's chapter file; falls back to the link when the title has
/// nothing slug-worthy in it.
pub fn story_slug(title: &str, link: &str) -> String {
    let slug = slugify(title);
    if !slug.is_empty() {
        return slug;
    }
    warn!("Title '{}' yields an empty slug, using link {}", title, link);
    slugify(link)
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_runs_and_trims() {
        assert_eq!(slugify("The Happy Prince"), "the-happy-prince");
        assert_eq!(slugify("  Alice's Adventures -- in Wonderland! "), "alice-s-adventures-in-wonderland");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slug_drops_non_ascii() {
        assert_eq!(slugify("Märchen 1812"), "m-rchen-1812");
    }

    #[test]
    fn empty_title_slug_uses_link() {
        assert_eq!(story_slug("The Fox", "https://example.org/fox.html"), "the-fox");
        assert_eq!(
            story_slug("", "https://www.gutenberg.org/files/1597/1597-h.htm"),
            "https-www-gutenberg-org-files-1597-1597-h-htm"
        );
        assert_eq!(story_slug("???", "https://example.org/a"), "https-example-org-a");
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("äöüß", 2), "äö...");
    }

    #[test]
    fn word_count_splits_on_any_whitespace() {
        assert_eq!(word_count("one  two\nthree\tfour"), 4);
        assert_eq!(word_count("   "), 0);
    }
}
