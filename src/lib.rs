//! Movie Shelf Library
//!
//! A library for managing a personal movie collection with pluggable
//! flat-file storage (JSON, CSV) and OMDb metadata lookups.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{Error, Result};
