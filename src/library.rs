use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::model::{Category, ChapterMap, StoryRecord};

/// All stored stories, at most one per `link`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    records: Vec<StoryRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Replaced,
}

impl Library {
    /// Later duplicates of a link replace earlier ones.
    pub fn from_records(records: Vec<StoryRecord>) -> Self {
        let mut library = Library::default();
        for record in records {
            library.upsert(record);
        }
        library
    }

    pub fn position(&self, link: &str) -> Option<usize> {
        self.records.iter().position(|r| r.link == link)
    }

    pub fn get(&self, link: &str) -> Option<&StoryRecord> {
        self.position(link).map(|i| &self.records[i])
    }

    pub fn contains(&self, link: &str) -> bool {
        self.position(link).is_some()
    }

    /// Replace the record with the same link in place, or append.
    pub fn upsert(&mut self, record: StoryRecord) -> Upsert {
        match self.position(&record.link) {
            Some(i) => {
                self.records[i] = record;
                Upsert::Replaced
            }
            None => {
                self.records.push(record);
                Upsert::Inserted
            }
        }
    }

    pub fn records(&self) -> &[StoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn count_by_category(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|c| (*c, self.records.iter().filter(|r| r.category == *c).count()))
            .collect()
    }

    /// Age bands in first-seen order with their counts.
    pub fn count_by_age(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for r in &self.records {
            match counts.iter_mut().find(|(band, _)| *band == r.age_category) {
                Some((_, n)) => *n += 1,
                None => counts.push((r.age_category.clone(), 1)),
            }
        }
        counts
    }
}

pub trait LibraryStore {
    fn load(&self) -> Result<Library>;
    fn save(&self, library: &Library) -> Result<()>;
}

pub trait ChapterStore {
    /// Returns the path written.
    fn write_chapter_file(&self, slug: &str, chapters: &ChapterMap) -> Result<PathBuf>;
}

/// Library kept as one pretty-printed JSON array.
pub struct JsonLibrary {
    path: PathBuf,
}

impl JsonLibrary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonLibrary { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LibraryStore for JsonLibrary {
    fn load(&self) -> Result<Library> {
        if !self.path.exists() {
            return Ok(Library::default());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read library {}", self.path.display()))?;
        let records: Vec<StoryRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed library {}", self.path.display()))?;
        Ok(Library::from_records(records))
    }

    fn save(&self, library: &Library) -> Result<()> {
        write_json(&self.path, &library.records)?;
        info!("Saved {} stories to {}", library.len(), self.path.display());
        Ok(())
    }
}

/// One `<slug>.json` chapter file per story.
pub struct ContentDir {
    dir: PathBuf,
}

impl ContentDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ContentDir { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}

impl ChapterStore for ContentDir {
    fn write_chapter_file(&self, slug: &str, chapters: &ChapterMap) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.dir.join(format!("{}.json", slug));
        write_json(&path, chapters)?;
        Ok(path)
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

// ── Tests ──
