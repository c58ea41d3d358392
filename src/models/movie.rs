//! Movie collection data models.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Attributes of one movie, keyed externally by title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieEntry {
    /// Release year. `None` marks a value that failed to parse on load.
    #[serde(default)]
    pub year: Option<i32>,
    /// Rating on the 0-10 scale. `None` marks a value that failed to parse.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Poster URL, or "N/A" when the source has none. Not validated.
    #[serde(default)]
    pub poster: String,
}

impl MovieEntry {
    /// Create an entry with parsed numeric fields.
    pub fn new(year: i32, rating: f64, poster: impl Into<String>) -> Self {
        Self {
            year: Some(year),
            rating: Some(rating),
            poster: poster.into(),
        }
    }
}

/// The full set of movies held by one storage backend.
///
/// Keyed by title, at most one entry per title. Iteration order is insertion
/// order: replacing an existing title keeps its position, new titles append.
/// The order is observable (statistics tie-breaks follow it, and it matches
/// file row order), so a hash or sorted map would change behavior.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    entries: Vec<(String, MovieEntry)>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of movies in the collection.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection holds no movies.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a movie with this title exists.
    pub fn contains(&self, title: &str) -> bool {
        self.entries.iter().any(|(t, _)| t == title)
    }

    /// Look up a movie by title.
    pub fn get(&self, title: &str) -> Option<&MovieEntry> {
        self.entries
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, e)| e)
    }

    /// Mutable lookup by title.
    pub fn get_mut(&mut self, title: &str) -> Option<&mut MovieEntry> {
        self.entries
            .iter_mut()
            .find(|(t, _)| t == title)
            .map(|(_, e)| e)
    }

    /// Insert or overwrite the entry for `title`.
    ///
    /// An existing title keeps its position; a new title appends at the end.
    pub fn insert(&mut self, title: impl Into<String>, entry: MovieEntry) {
        let title = title.into();
        match self.entries.iter().position(|(t, _)| *t == title) {
            Some(pos) => self.entries[pos].1 = entry,
            None => self.entries.push((title, entry)),
        }
    }

    /// Remove the entry for `title`. Returns whether it existed.
    pub fn remove(&mut self, title: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(t, _)| t != title);
        before != self.entries.len()
    }

    /// Iterate over (title, entry) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MovieEntry)> + '_ {
        self.entries.iter().map(|(t, e)| (t.as_str(), e))
    }
}

impl FromIterator<(String, MovieEntry)> for Collection {
    fn from_iter<I: IntoIterator<Item = (String, MovieEntry)>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for (title, entry) in iter {
            collection.insert(title, entry);
        }
        collection
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (title, entry) in &self.entries {
            map.serialize_entry(title, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = Collection;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of movie titles to movie entries")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut collection = Collection::new();
                while let Some((title, entry)) = access.next_entry::<String, MovieEntry>()? {
                    collection.insert(title, entry);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
