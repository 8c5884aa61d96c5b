//! # Storage Layer
//!
//! This module defines the storage abstraction for bookshelf. The [`DataStore`]
//! trait lets the application work against different backends.
//!
//! Storage is deliberately whole-collection: [`DataStore::load`] reads every
//! record, [`DataStore::save`] rewrites every record. There is no partial
//! update path, no transaction and no protection against a second writer.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: Production storage in a single CSV file
//!   - Header row `Title,Author,Year,Genre,Rating`, one row per book
//!   - A missing file is created with only the header on first load
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert read-only commands never write
//!
//! ## Storage Format
//!
//! ```text
//! Title,Author,Year,Genre,Rating
//! Dune,Herbert,1965,Sci-Fi,4.8
//! "Guns, Germs, and Steel",Diamond,1997,History,
//! ```
//!
//! Book ids are synthetic and exist only in memory; they are regenerated on
//! every load.

use crate::error::Result;
use crate::model::Library;

pub mod fs;
pub mod memory;

/// Abstract interface for book storage.
pub trait DataStore {
    /// Load the full collection in store order
    fn load(&self) -> Result<Library>;

    /// Replace the stored collection with `library`
    fn save(&mut self, library: &Library) -> Result<()>;
}
