use std::sync::LazyLock;

use regex::Regex;

static BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

pub const FALLBACK_SUMMARY: &str = "A story about imagination, adventure, and transformation.";
const MIN_SUMMARY_WORDS: usize = 7;

/// Split after `.`, `!` or `?` when followed by whitespace. The terminator
/// stays with its sentence.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for m in BOUNDARY_RE.find_iter(text) {
        out.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

/// First sentence with more than six words.
pub fn summarize(text: &str) -> String {
    sentences(text)
        .into_iter()
        .find(|s| s.split_whitespace().count() >= MIN_SUMMARY_WORDS)
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| FALLBACK_SUMMARY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_short_opening() {
        let text = "Hi. This is a longer introductory sentence with more than six words in it.";
        assert_eq!(
            summarize(text),
            "This is a longer introductory sentence with more than six words in it."
        );
    }

    #[test]
    fn short_sentences_fall_back() {
        assert_eq!(summarize("Hi. Go away! Who are you?"), FALLBACK_SUMMARY);
        assert_eq!(summarize(""), FALLBACK_SUMMARY);
    }

    #[test]
    fn six_words_is_not_enough() {
        assert_eq!(summarize("One two three four five six."), FALLBACK_SUMMARY);
        assert_eq!(
            summarize("One two three four five six seven."),
            "One two three four five six seven."
        );
    }

    #[test]
    fn unterminated_tail_is_a_sentence() {
        let s = sentences("Stop! and then it went on and on without end");
        assert_eq!(s, vec!["Stop!", "and then it went on and on without end"]);
    }

    #[test]
    fn decimal_points_do_not_split() {
        assert_eq!(sentences("It cost 3.50 pounds. Fine."), vec!["It cost 3.50 pounds.", "Fine."]);
    }
}
