use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

use crate::error::ExtractError;

static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static AUTHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2").unwrap());
static BY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bby\b").unwrap());
static BRACKET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*?\]").unwrap());
static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub const UNKNOWN_AUTHOR: &str = "Unknown";
const COVER_PATH: &str = "/images/cover.jpg";

/// Publisher preambles that precede the work title in `<title>`.
const TITLE_PREFIXES: &[&str] = &[
    "The Project Gutenberg eBook of",
    "The Project Gutenberg EBook of",
    "The Project Gutenberg Ebook of",
];

/// Text under these elements never reaches the reader.
const HIDDEN_TAGS: &[&str] = &["head", "script", "style", "noscript", "template"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub title: String,
    pub author: String,
    pub text: String,
}

pub fn normalize(html: &str, url: &str) -> Result<Normalized, ExtractError> {
    let document = Html::parse_document(html);

    let raw_title = document
        .select(&TITLE_SEL)
        .next()
        .map(element_text)
        .ok_or_else(|| ExtractError::MissingTitle {
            url: url.to_string(),
        })?;

    let author = document
        .select(&AUTHOR_SEL)
        .next()
        .map(|h2| clean_author(&element_text(h2)))
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    let mut nodes = Vec::new();
    collect_visible_text(document.root_element(), &mut nodes);

    Ok(Normalized {
        title: clean_title(&raw_title),
        author,
        text: nodes.join(" "),
    })
}

pub fn clean_title(raw: &str) -> String {
    let mut title = raw.trim();
    for prefix in TITLE_PREFIXES {
        if let Some(rest) = title.strip_prefix(prefix) {
            title = rest;
            break;
        }
    }
    title.split(", by").next().unwrap_or_default().trim().to_string()
}

pub fn clean_author(raw: &str) -> String {
    let without_by = BY_RE.replace_all(raw, "");
    let without_notes = BRACKET_RE.replace_all(&without_by, "");
    let author = SPACE_RE.replace_all(&without_notes, " ").trim().to_string();
    if author.is_empty() {
        UNKNOWN_AUTHOR.to_string()
    } else {
        author
    }
}

/// Parent directory of the page plus the conventional cover path.
pub fn cover_image_url(url: &str) -> String {
    let base = url.rsplit_once('/').map(|(base, _)| base).unwrap_or(url);
    format!("{}{}", base, COVER_PATH)
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn collect_visible_text<'a>(element: ElementRef<'a>, out: &mut Vec<&'a str>) {
    if HIDDEN_TAGS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            collect_visible_text(child_el, out);
        } else if let Node::Text(text) = child.value() {
            let t = text.trim();
            if !t.is_empty() {
                out.push(t);
            }
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.gutenberg.org/files/1597/1597-h/1597-h.htm";

    #[test]
    fn gutenberg_title_is_cleaned() {
        assert_eq!(
            clean_title("The Project Gutenberg eBook of The Snow Queen, by Hans Christian Andersen"),
            "The Snow Queen"
        );
        assert_eq!(clean_title("  The Happy Prince  "), "The Happy Prince");
    }

    #[test]
    fn author_drops_by_and_annotations() {
        assert_eq!(clean_author("by Lewis Carroll"), "Lewis Carroll");
        assert_eq!(
            clean_author("by  Hans Christian Andersen [Translator: H. P. Paull]"),
            "Hans Christian Andersen"
        );
        // "by" inside a name is kept
        assert_eq!(clean_author("by Percy Bysshe Shelley"), "Percy Bysshe Shelley");
        assert_eq!(clean_author("by [editor]"), UNKNOWN_AUTHOR);
    }

    #[test]
    fn cover_url_uses_parent_directory() {
        assert_eq!(
            cover_image_url(URL),
            "https://www.gutenberg.org/files/1597/1597-h/images/cover.jpg"
        );
        assert_eq!(cover_image_url("no-slash"), "no-slash/images/cover.jpg");
    }

    #[test]
    fn missing_title_is_fatal() {
        let html = "<html><body><h2>by Someone</h2><p>Text.</p></body></html>";
        let err = normalize(html, URL).unwrap_err();
        assert!(matches!(err, ExtractError::MissingTitle { ref url } if url == URL));
    }

    #[test]
    fn missing_author_heading_falls_back() {
        let html = "<html><head><title>A Tale</title></head><body><p>Once.</p></body></html>";
        let n = normalize(html, URL).unwrap();
        assert_eq!(n.title, "A Tale");
        assert_eq!(n.author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn plain_text_joins_visible_nodes() {
        let html = r#"<html>
            <head><title>A Tale</title><style>p { color: red; }</style></head>
            <body>
              <h1>A   Tale</h1>
              <script>var hidden = "nope";</script>
              <p>Once upon a <i>time</i>, there was a fox.</p>
            </body></html>"#;
        let n = normalize(html, URL).unwrap();
        assert_eq!(n.text, "A   Tale Once upon a time , there was a fox.");
        assert!(!n.text.contains("hidden"));
        assert!(!n.text.contains("color"));
    }
}
