//! Integration tests for the storage backends.
//!
//! Both backends implement the same contract, so most cases run against
//! each through the MovieStorage trait.

use movie_shelf::models::movie::{Collection, MovieEntry};
use movie_shelf::storage::{CsvStorage, JsonStorage, MovieStorage};
use std::path::Path;
use tempfile::TempDir;

fn backends(dir: &Path) -> Vec<Box<dyn MovieStorage>> {
    vec![
        Box::new(JsonStorage::new(dir.join("movies.json"))),
        Box::new(CsvStorage::new(dir.join("movies.csv"))),
    ]
}

// ========== LOAD DEGRADATION ==========

#[test]
fn missing_file_loads_as_empty_collection() {
    let temp_dir = TempDir::new().unwrap();
    for storage in backends(temp_dir.path()) {
        assert!(storage.list().is_empty());
    }
}

#[test]
fn zero_byte_file_loads_as_empty_collection() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("movies.json"), "").unwrap();
    std::fs::write(temp_dir.path().join("movies.csv"), "").unwrap();

    for storage in backends(temp_dir.path()) {
        assert!(storage.list().is_empty());
    }
}

#[test]
fn corrupt_file_loads_as_empty_collection() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("movies.json"), "{not valid json").unwrap();
    std::fs::write(temp_dir.path().join("movies.csv"), "wrong,header,row\na,b,c\n").unwrap();

    for storage in backends(temp_dir.path()) {
        assert!(storage.list().is_empty());
    }
}

// ========== CRUD CONTRACT ==========

#[test]
fn add_then_list_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    for storage in backends(temp_dir.path()) {
        storage
            .add("Alien", 1979, 8.5, "http://example.com/alien.jpg")
            .unwrap();

        let movies = storage.list();
        assert_eq!(movies.len(), 1);
        let entry = movies.get("Alien").unwrap();
        assert_eq!(entry.year, Some(1979));
        assert_eq!(entry.rating, Some(8.5));
        assert_eq!(entry.poster, "http://example.com/alien.jpg");
    }
}

#[test]
fn operation_sequence_yields_net_effect() {
    let temp_dir = TempDir::new().unwrap();
    for storage in backends(temp_dir.path()) {
        storage.add("Alien", 1979, 8.5, "N/A").unwrap();
        storage.add("Blade Runner", 1982, 8.1, "N/A").unwrap();
        storage.add("Alien", 1979, 7.0, "N/A").unwrap(); // last write wins
        storage.update("Blade Runner", 9.0).unwrap();
        storage.delete("Alien").unwrap();

        let movies = storage.list();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies.get("Blade Runner").unwrap().rating, Some(9.0));
        assert!(!movies.contains("Alien"));
    }
}

#[test]
fn delete_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    for storage in backends(temp_dir.path()) {
        storage.add("Alien", 1979, 8.5, "N/A").unwrap();
        storage.delete("Alien").unwrap();
        let after_once = storage.list();

        storage.delete("Alien").unwrap();
        assert_eq!(storage.list(), after_once);
    }
}

#[test]
fn update_unknown_title_leaves_collection_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    for storage in backends(temp_dir.path()) {
        storage.add("Alien", 1979, 8.5, "N/A").unwrap();
        let before = storage.list();

        storage.update("No Such Movie", 9.9).unwrap();
        assert_eq!(storage.list(), before);
    }
}

#[test]
fn update_touches_only_the_rating() {
    let temp_dir = TempDir::new().unwrap();
    for storage in backends(temp_dir.path()) {
        storage
            .add("Alien", 1979, 8.5, "http://example.com/alien.jpg")
            .unwrap();
        storage.update("Alien", 9.0).unwrap();

        let movies = storage.list();
        let entry = movies.get("Alien").unwrap();
        assert_eq!(entry.rating, Some(9.0));
        assert_eq!(entry.year, Some(1979));
        assert_eq!(entry.poster, "http://example.com/alien.jpg");
    }
}

#[test]
fn iteration_order_survives_a_rewrite() {
    let temp_dir = TempDir::new().unwrap();
    for storage in backends(temp_dir.path()) {
        storage.add("Zodiac", 2007, 7.7, "N/A").unwrap();
        storage.add("Arrival", 2016, 7.9, "N/A").unwrap();
        storage.add("Moon", 2009, 7.8, "N/A").unwrap();
        // Overwriting must not move the entry
        storage.add("Zodiac", 2007, 8.0, "N/A").unwrap();

        let titles: Vec<String> = storage
            .list()
            .iter()
            .map(|(t, _)| t.to_string())
            .collect();
        assert_eq!(titles, vec!["Zodiac", "Arrival", "Moon"]);
    }
}

// ========== ENCODING-SPECIFIC BEHAVIOR ==========

#[test]
fn csv_unparseable_numbers_load_as_sentinel_not_zero() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("movies.csv");
    std::fs::write(
        &path,
        "title,year,rating,poster\nAlien,unknown,N/A,poster.jpg\nMoon,0,0,p.jpg\n",
    )
    .unwrap();

    let movies = CsvStorage::new(&path).list();
    let alien = movies.get("Alien").unwrap();
    assert_eq!(alien.year, None);
    assert_eq!(alien.rating, None);

    // A parsed zero stays a zero
    let moon = movies.get("Moon").unwrap();
    assert_eq!(moon.year, Some(0));
    assert_eq!(moon.rating, Some(0.0));
}

#[test]
fn csv_sentinel_serializes_as_empty_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("movies.csv");
    std::fs::write(
        &path,
        "title,year,rating,poster\nAlien,unknown,N/A,poster.jpg\n",
    )
    .unwrap();

    let storage = CsvStorage::new(&path);
    // Any mutation triggers the full rewrite
    storage.delete("No Such Movie").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "title,year,rating,poster\nAlien,,,poster.jpg\n");
}

#[test]
fn csv_quotes_titles_containing_commas() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("movies.csv");
    let storage = CsvStorage::new(&path);

    storage
        .add("Crouching Tiger, Hidden Dragon", 2000, 7.9, "N/A")
        .unwrap();

    let movies = storage.list();
    assert!(movies.contains("Crouching Tiger, Hidden Dragon"));
}

#[test]
fn csv_fields_containing_newlines_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("movies.csv");
    let storage = CsvStorage::new(&path);

    storage
        .add("Alien\nResurrection", 1997, 6.3, "http://example.com/a.jpg\nmirror")
        .unwrap();
    storage.add("Moon", 2009, 7.8, "N/A").unwrap();

    let movies = storage.list();
    assert_eq!(movies.len(), 2);
    let entry = movies.get("Alien\nResurrection").unwrap();
    assert_eq!(entry.year, Some(1997));
    assert_eq!(entry.poster, "http://example.com/a.jpg\nmirror");
    assert!(movies.contains("Moon"));
}

#[test]
fn json_file_is_pretty_printed() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("movies.json");
    let storage = JsonStorage::new(&path);

    storage.add("Alien", 1979, 8.5, "N/A").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\n  \"Alien\""));
}

#[test]
fn json_null_numeric_fields_are_tolerated() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("movies.json");
    std::fs::write(
        &path,
        r#"{"Alien": {"year": null, "rating": null, "poster": "N/A"}}"#,
    )
    .unwrap();

    let movies = JsonStorage::new(&path).list();
    let entry = movies.get("Alien").unwrap();
    assert_eq!(entry.year, None);
    assert_eq!(entry.rating, None);
}

#[test]
fn backends_agree_on_collection_contents() {
    let temp_dir = TempDir::new().unwrap();
    let mut expected = Collection::new();
    expected.insert("Alien", MovieEntry::new(1979, 8.5, "N/A"));
    expected.insert("Moon", MovieEntry::new(2009, 7.8, "N/A"));

    for storage in backends(temp_dir.path()) {
        for (title, entry) in expected.iter() {
            storage
                .add(title, entry.year.unwrap(), entry.rating.unwrap(), &entry.poster)
                .unwrap();
        }
        assert_eq!(storage.list(), expected);
    }
}
