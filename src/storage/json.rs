//! JSON storage backend.
//!
//! The whole collection is one pretty-printed JSON document: top-level keys
//! are titles, each value an object with `year`, `rating`, and `poster`.

use crate::models::movie::{Collection, MovieEntry};
use crate::storage::MovieStorage;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Movie storage backed by a single JSON file.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create a backend owning the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File path this backend reads and rewrites.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Collection {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Collection::new(),
        };

        match serde_json::from_str(&content) {
            Ok(collection) => collection,
            Err(e) => {
                warn!("ignoring unparseable JSON in {}: {}", self.path.display(), e);
                Collection::new()
            }
        }
    }

    fn save(&self, collection: &Collection) -> Result<()> {
        let json = serde_json::to_string_pretty(collection)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl MovieStorage for JsonStorage {
    fn list(&self) -> Collection {
        self.load()
    }

    fn add(&self, title: &str, year: i32, rating: f64, poster: &str) -> Result<()> {
        let mut collection = self.load();
        collection.insert(title, MovieEntry::new(year, rating, poster));
        self.save(&collection)
    }

    fn delete(&self, title: &str) -> Result<()> {
        let mut collection = self.load();
        collection.remove(title);
        self.save(&collection)
    }

    fn update(&self, title: &str, rating: f64) -> Result<()> {
        let mut collection = self.load();
        if let Some(entry) = collection.get_mut(title) {
            entry.rating = Some(rating);
        }
        self.save(&collection)
    }
}
