//! Delete command implementation.

use crate::storage::MovieStorage;
use crate::Result;

/// Delete a movie by title. Idempotent: succeeds whether or not it existed.
pub fn delete_movie(storage: &dyn MovieStorage, title: &str) -> Result<()> {
    let title = title.trim();
    storage.delete(title)?;
    println!("Movie '{}' deleted (if it existed).", title);
    Ok(())
}
