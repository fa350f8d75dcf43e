use crate::model::Category;

/// Checked in order; the first theme with any keyword present wins.
const THEMES: &[(Category, &[&str])] = &[
    (Category::Morality, &["foolish", "wise", "lesson", "moral", "punish"]),
    (Category::Consequences, &["consequence", "result", "choice", "action", "regret"]),
    (Category::Empathy, &["feel", "change", "understand", "kind", "transform"]),
    (Category::Friendship, &["friend", "loyal", "trust", "help", "together"]),
    (Category::GrowingUp, &["child", "grow", "responsible", "adult", "learn"]),
    (Category::Curiosity, &["dream", "imagine", "wonder", "explore", "magic"]),
];

pub const DEFAULT_CATEGORY: Category = Category::Curiosity;

/// Keywords match as case-insensitive substrings, so "helpful" counts for "help".
pub fn detect_category(text: &str) -> Category {
    let lower = text.to_lowercase();
    THEMES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_alone_is_curiosity() {
        assert_eq!(detect_category("magic"), Category::Curiosity);
    }

    #[test]
    fn no_keywords_falls_back_to_curiosity() {
        assert_eq!(detect_category("The cat sat on the mat."), DEFAULT_CATEGORY);
        assert_eq!(DEFAULT_CATEGORY, Category::Curiosity);
        assert_eq!(detect_category(""), DEFAULT_CATEGORY);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(detect_category("A LOYAL hound"), Category::Friendship);
        assert_eq!(detect_category("Regret"), Category::Consequences);
    }

    #[test]
    fn earlier_theme_wins_ties() {
        // friend (Friendship) appears more often, but wise (Morality) is declared first
        let text = "friend friend friend, said the wise owl";
        assert_eq!(detect_category(text), Category::Morality);
        assert_eq!(detect_category("she would dream and grow"), Category::GrowingUp);
    }

    #[test]
    fn keyword_matches_inside_words() {
        assert_eq!(detect_category("a helpful neighbour"), Category::Friendship);
    }

    #[test]
    fn every_theme_is_reachable() {
        for (category, keywords) in THEMES {
            assert_eq!(detect_category(keywords[0]), *category);
        }
    }
}
