use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Label used when a page has no chapter markers.
pub const FULL_STORY: &str = "Full Story";

/// One entry in the library, keyed by `link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub category: Category,
    pub cover_image: String,
    pub link: String,
    pub summary: String,
    pub reading_time: String,
    pub age_category: String,
    pub characters: Vec<Character>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub description: String,
}

/// Thematic buckets, in classifier priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Morality & Cautionary Lessons")]
    Morality,
    #[serde(rename = "Actions & Consequences")]
    Consequences,
    #[serde(rename = "Empathy & Transformation")]
    Empathy,
    #[serde(rename = "Friendship & Loyalty")]
    Friendship,
    #[serde(rename = "Growing Up & Responsibility")]
    GrowingUp,
    #[serde(rename = "Curiosity & Imagination")]
    Curiosity,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Morality,
        Category::Consequences,
        Category::Empathy,
        Category::Friendship,
        Category::GrowingUp,
        Category::Curiosity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Morality => "Morality & Cautionary Lessons",
            Category::Consequences => "Actions & Consequences",
            Category::Empathy => "Empathy & Transformation",
            Category::Friendship => "Friendship & Loyalty",
            Category::GrowingUp => "Growing Up & Responsibility",
            Category::Curiosity => "Curiosity & Imagination",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered chapter label → chapter text.
///
/// Serializes as a JSON object whose keys keep chapter order. Inserting an
/// existing label replaces its text but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterMap {
    entries: Vec<(String, String)>,
}

impl ChapterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the replaced text when `label` was already present.
    pub fn insert(&mut self, label: String, text: String) -> Option<String> {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => Some(std::mem::replace(existing, text)),
            None => {
                self.entries.push((label, text));
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, t)| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, t)| (l.as_str(), t.as_str()))
    }
}

impl Serialize for ChapterMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, text) in &self.entries {
            map.serialize_entry(label, text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChapterMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChapterMapVisitor;

        impl<'de> Visitor<'de> for ChapterMapVisitor {
            type Value = ChapterMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of chapter label to chapter text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ChapterMap, A::Error> {
                let mut chapters = ChapterMap::new();
                while let Some((label, text)) = access.next_entry::<String, String>()? {
                    chapters.insert(label, text);
                }
                Ok(chapters)
            }
        }

        deserializer.deserialize_map(ChapterMapVisitor)
    }
}

// ── Tests ──
