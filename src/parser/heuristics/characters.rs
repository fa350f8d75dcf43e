use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::summary::sentences;
use crate::model::Character;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]{2,}(?:\s+[A-Z][a-z]{2,})?\b").unwrap());

pub const MAX_CHARACTERS: usize = 10;

/// Capitalized words that show up in page boilerplate rather than as names.
const STOPWORDS: &[&str] = &[
    "Chapter", "Project", "Gutenberg", "This", "That", "From", "With", "Table", "About", "Above",
    "Below", "More", "Less", "Other",
];

/// Capitalized single words or pairs, deduplicated, first ten in lexical order.
pub fn extract_characters(text: &str) -> Vec<Character> {
    let mut names = BTreeSet::new();
    for sentence in sentences(text) {
        for m in NAME_RE.find_iter(sentence) {
            if let Some(name) = candidate_name(m.as_str()) {
                names.insert(name);
            }
        }
    }

    names
        .into_iter()
        .take(MAX_CHARACTERS)
        .map(|name| Character {
            description: describe(&name),
            name,
        })
        .collect()
}

fn candidate_name(matched: &str) -> Option<String> {
    let words: Vec<&str> = matched
        .split_whitespace()
        .filter(|w| !STOPWORDS.contains(w))
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn describe(name: &str) -> String {
    format!(
        "{} is a recurring character who appears to play a key role in the narrative.",
        name
    )
}
