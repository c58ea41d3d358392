//! User-facing command implementations.

pub mod add;
pub mod delete;
pub mod list;
pub mod stats;
pub mod update;
pub mod website;
