//! Statistics command implementation.

use crate::core::stats;
use crate::storage::MovieStorage;
use crate::Result;
use colored::Colorize;

/// Print summary statistics for the collection.
pub fn show_stats(storage: &dyn MovieStorage) -> Result<()> {
    let movies = storage.list();
    if movies.is_empty() {
        println!("No movies found. Cannot calculate statistics.");
        return Ok(());
    }

    let Some(stats) = stats::compute(&movies) else {
        println!("No valid ratings found. Cannot calculate statistics.");
        return Ok(());
    };

    println!();
    println!("{}", "--- Movie Statistics ---".bold());
    println!("Number of Movies: {}", stats.total);
    println!("Average Rating: {:.2}", stats.average);
    println!("Highest Rated: {} ({})", stats.best_title, stats.best_rating);
    println!("Lowest Rated: {} ({})", stats.worst_title, stats.worst_rating);

    Ok(())
}
