//! Website generation command implementation.

use crate::core::website;
use crate::models::config::WebsiteConfig;
use crate::storage::MovieStorage;
use crate::Result;
use colored::Colorize;

/// Generate the static gallery page from the collection.
///
/// Writes nothing for an empty collection or a missing template.
pub fn generate_website(storage: &dyn MovieStorage, config: &WebsiteConfig) -> Result<()> {
    let movies = storage.list();
    if movies.is_empty() {
        println!("No movies found. Website not generated.");
        return Ok(());
    }

    website::generate_website(&movies, &config.template_path, &config.output_path)?;
    println!(
        "{} {}",
        "Website was generated successfully:".green(),
        config.output_path.display()
    );
    Ok(())
}
