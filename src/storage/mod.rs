//! Storage backends for the movie collection.
//!
//! Each backend owns one file and implements the same contract: the whole
//! collection is loaded at the start of every operation and, for mutations,
//! rewritten in full afterwards. The file is the only state between calls.

pub mod csv;
pub mod json;

pub use csv::CsvStorage;
pub use json::JsonStorage;

use crate::models::movie::Collection;
use crate::Result;

/// Uniform CRUD contract over a persisted movie collection.
pub trait MovieStorage {
    /// Load the full collection.
    ///
    /// A missing, empty, or unparseable file degrades to an empty collection.
    /// This never fails: availability wins over strict error surfacing for a
    /// single-user tool.
    fn list(&self) -> Collection;

    /// Insert or overwrite the record for `title`, then persist.
    fn add(&self, title: &str, year: i32, rating: f64, poster: &str) -> Result<()>;

    /// Remove the record for `title` if present (no-op otherwise), then persist.
    fn delete(&self, title: &str) -> Result<()>;

    /// Replace only the rating of `title` if present, then persist.
    ///
    /// An unknown title is a silent no-op; the unchanged collection is still
    /// written back.
    fn update(&self, title: &str, rating: f64) -> Result<()>;
}
