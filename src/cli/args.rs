//! Command line argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Movie Shelf - manage a personal movie collection from a text menu
#[derive(Parser, Debug)]
#[command(name = "movie-shelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Storage backend for the collection file
    #[arg(short, long, value_enum, default_value_t = StorageFormat::Json)]
    pub storage: StorageFormat,

    /// Path to the collection file (defaults to movies.json or movies.csv)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Selectable storage encodings.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    /// One pretty-printed JSON document keyed by title
    Json,
    /// Header row plus one comma-delimited row per movie
    Csv,
}

impl std::fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageFormat::Json => write!(f, "json"),
            StorageFormat::Csv => write!(f, "csv"),
        }
    }
}

impl StorageFormat {
    /// Default collection file name for this encoding.
    pub fn default_file(&self) -> &'static str {
        match self {
            StorageFormat::Json => "movies.json",
            StorageFormat::Csv => "movies.csv",
        }
    }
}
