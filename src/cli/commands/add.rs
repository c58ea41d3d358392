//! Add command implementation.

use crate::services::omdb::OmdbClient;
use crate::storage::MovieStorage;
use crate::{Error, Result};
use colored::Colorize;

/// Resolve a title on OMDb and store the result.
///
/// Nothing is written when validation or the lookup fails; the movie is
/// stored under OMDb's canonical title, not the user's spelling.
pub async fn add_movie(
    storage: &dyn MovieStorage,
    client: &OmdbClient,
    title: &str,
) -> Result<()> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::EmptyTitle);
    }

    let lookup = client.lookup(title).await?;
    storage.add(&lookup.title, lookup.year, lookup.rating, &lookup.poster)?;

    println!("Movie '{}' added successfully.", lookup.title.green());
    Ok(())
}
