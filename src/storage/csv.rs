//! CSV storage backend.
//!
//! One header row (`title,year,rating,poster`), one data row per movie.
//! File row order is the collection's iteration order. Numeric fields that
//! fail to parse load as `None` and are written back as empty fields, so an
//! unparseable value stays distinct from a parsed zero.

use crate::models::movie::{Collection, MovieEntry};
use crate::storage::MovieStorage;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

const HEADER: [&str; 4] = ["title", "year", "rating", "poster"];

/// Movie storage backed by a single CSV file.
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
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

        let mut records = parse_records(&content).into_iter();
        let header = match records.next() {
            Some(fields) => fields,
            None => return Collection::new(),
        };
        if header != HEADER {
            warn!("ignoring CSV with unexpected header in {}", self.path.display());
            return Collection::new();
        }

        let mut collection = Collection::new();
        for fields in records {
            if fields.len() == 1 && fields[0].trim().is_empty() {
                continue;
            }
            if fields.len() != HEADER.len() {
                warn!("skipping malformed CSV row in {}", self.path.display());
                continue;
            }
            let entry = MovieEntry {
                year: fields[1].parse().ok(),
                rating: fields[2].parse().ok(),
                poster: fields[3].clone(),
            };
            collection.insert(fields[0].clone(), entry);
        }
        collection
    }

    fn save(&self, collection: &Collection) -> Result<()> {
        let mut out = String::new();
        out.push_str(&HEADER.join(","));
        out.push('\n');

        for (title, entry) in collection.iter() {
            let year = entry.year.map(|y| y.to_string()).unwrap_or_default();
            let rating = entry.rating.map(|r| r.to_string()).unwrap_or_default();
            out.push_str(&format!(
                "{},{},{},{}\n",
                escape_field(title),
                year,
                rating,
                escape_field(&entry.poster)
            ));
        }

        std::fs::write(&self.path, out)?;
        Ok(())
    }
}

impl MovieStorage for CsvStorage {
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

/// Split CSV content into records of fields, honoring double-quoted fields,
/// `""` escapes, and quoted line breaks. A newline only ends a record when it
/// falls outside quotes.
fn parse_records(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
                records.push(std::mem::take(&mut fields));
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() || !fields.is_empty() {
        fields.push(current);
        records.push(fields);
    }
    records
}

/// Quote a field if it contains a delimiter, quote, or line break.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
