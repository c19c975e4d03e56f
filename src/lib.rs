//! dayvault - Day One export to Markdown vault converter
//!
//! Reads a Day One JSON export and writes one Markdown note per entry, with a
//! front-matter header, embedded media renamed to stable identifiers, and file
//! timestamps matching the journal entry.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DayvaultError;
