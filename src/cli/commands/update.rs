//! Update-rating command implementation.

use crate::storage::MovieStorage;
use crate::{Error, Result};

/// Replace a movie's rating. Validates input before touching storage.
pub fn update_rating(storage: &dyn MovieStorage, title: &str, rating: &str) -> Result<()> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::EmptyTitle);
    }

    let rating = rating.trim();
    if rating.is_empty() {
        return Err(Error::EmptyRating);
    }
    let rating: f64 = rating
        .parse()
        .map_err(|_| Error::InvalidRating(rating.to_string()))?;

    storage.update(title, rating)?;
    println!("Movie '{}' rating updated (if it existed).", title);
    Ok(())
}
