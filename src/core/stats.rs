//! Aggregate statistics over a movie collection.

use crate::models::movie::Collection;

/// Summary statistics for a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStats {
    /// Total number of movies, including ones without a usable rating.
    pub total: usize,
    /// Arithmetic mean of the usable ratings.
    pub average: f64,
    /// Highest-rated movie.
    pub best_title: String,
    pub best_rating: f64,
    /// Lowest-rated movie.
    pub worst_title: String,
    pub worst_rating: f64,
}

/// Compute statistics over the movies that carry a usable rating.
///
/// Returns `None` for an empty collection or one where no rating parsed.
/// Ties for best/worst go to the first movie in the collection's iteration
/// order, which callers observe — comparisons are strict on purpose.
pub fn compute(collection: &Collection) -> Option<CollectionStats> {
    let mut sum = 0.0;
    let mut count = 0usize;
    let mut best: Option<(&str, f64)> = None;
    let mut worst: Option<(&str, f64)> = None;

    for (title, entry) in collection.iter() {
        let Some(rating) = entry.rating else { continue };
        sum += rating;
        count += 1;

        match best {
            Some((_, r)) if rating <= r => {}
            _ => best = Some((title, rating)),
        }
        match worst {
            Some((_, r)) if rating >= r => {}
            _ => worst = Some((title, rating)),
        }
    }

    let (best_title, best_rating) = best?;
    let (worst_title, worst_rating) = worst?;

    Some(CollectionStats {
        total: collection.len(),
        average: sum / count as f64,
        best_title: best_title.to_string(),
        best_rating,
        worst_title: worst_title.to_string(),
        worst_rating,
    })
}
