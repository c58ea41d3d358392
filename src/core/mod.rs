//! Core collection logic.

pub mod stats;
pub mod website;
