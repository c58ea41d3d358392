//! List command implementation.

use crate::storage::MovieStorage;
use crate::Result;
use colored::Colorize;

/// Print every movie in the collection.
pub fn list_movies(storage: &dyn MovieStorage) -> Result<()> {
    let movies = storage.list();
    if movies.is_empty() {
        println!("No movies found.");
        return Ok(());
    }

    println!();
    println!("{}", "--- List of Movies ---".bold());
    for (title, entry) in movies.iter() {
        let year = entry
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let rating = entry
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{} ({}) - Rating: {} - Poster: {}",
            title.bold(),
            year,
            rating,
            entry.poster
        );
    }

    Ok(())
}
