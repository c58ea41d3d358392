//! Movie Shelf CLI
//!
//! A menu-driven manager for a personal movie collection with pluggable
//! JSON/CSV storage and OMDb metadata lookups.

use clap::Parser;
use movie_shelf::cli::args::{Cli, StorageFormat};
use movie_shelf::cli::menu;
use movie_shelf::models::config;
use movie_shelf::storage::{CsvStorage, JsonStorage, MovieStorage};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = config::load_config();

    // Select the storage backend at startup; everything downstream only
    // sees the MovieStorage contract.
    let file = cli
        .file
        .unwrap_or_else(|| PathBuf::from(cli.storage.default_file()));
    let storage: Box<dyn MovieStorage> = match cli.storage {
        StorageFormat::Json => Box::new(JsonStorage::new(file)),
        StorageFormat::Csv => Box::new(CsvStorage::new(file)),
    };

    menu::run(storage.as_ref(), &config).await?;

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("movie_shelf=debug")
    } else {
        EnvFilter::new("movie_shelf=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
