//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all bookshelf operations, whatever UI is driving them.
//!
//! Each method follows the same cycle: load the whole collection from the
//! store, hand it to a command, and, for mutating commands only, save the
//! whole collection back. Read-only methods never call [`DataStore::save`].
//!
//! Delete is the one operation split in two, because the user picks from the
//! match list before anything is removed: [`LibraryApi::delete_candidates`]
//! loads and filters, and [`LibraryApi::delete_books`] applies a selection to
//! the same loaded [`Library`] and saves. Ids in the match list are only valid
//! for the library they came from.
//!
//! ## Generic Over DataStore
//!
//! `LibraryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `LibraryApi<CsvStore>`
//! - Testing: `LibraryApi<InMemoryStore>`

use crate::commands::{self, export::ExportOptions, CmdResult, Format};
use crate::error::Result;
use crate::index::{DisplayBook, Selection};
use crate::model::Library;
use crate::store::DataStore;
use std::path::Path;

pub use crate::commands::add::NewBook;
pub use crate::commands::{CmdMessage, MessageLevel};

/// The main API facade for bookshelf operations.
pub struct LibraryApi<S: DataStore> {
    store: S,
    current_year: i32,
    export_options: ExportOptions,
}

/// A loaded library together with the delete candidates found in it.
#[derive(Debug)]
pub struct DeleteCandidates {
    pub library: Library,
    pub result: CmdResult,
}

impl DeleteCandidates {
    pub fn matches(&self) -> &[DisplayBook] {
        &self.result.listed_books
    }
}

impl<S: DataStore> LibraryApi<S> {
    /// `current_year` bounds the year accepted when adding books.
    pub fn new(store: S, current_year: i32) -> Self {
        Self {
            store,
            current_year,
            export_options: ExportOptions::default(),
        }
    }

    pub fn with_export_options(mut self, options: ExportOptions) -> Self {
        self.export_options = options;
        self
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load(&self) -> Result<Library> {
        self.store.load()
    }

    pub fn save(&mut self, library: &Library) -> Result<()> {
        self.store.save(library)
    }

    pub fn add_book(&mut self, new_book: &commands::add::NewBook) -> Result<CmdResult> {
        let mut library = self.load()?;
        let result = commands::add::run(&mut library, new_book, self.current_year)?;
        self.save(&library)?;
        Ok(result)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.load()?)
    }

    pub fn search_books(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.load()?, term)
    }

    pub fn delete_candidates(&self, term: &str) -> Result<DeleteCandidates> {
        let library = self.load()?;
        let result = commands::delete::find(&library, term)?;
        Ok(DeleteCandidates { library, result })
    }

    /// Applies `selection` to `candidates`. Saves only when books were
    /// removed; on a selection error the candidates are unchanged and may be
    /// retried.
    pub fn delete_books(
        &mut self,
        candidates: &mut DeleteCandidates,
        selection: &Selection,
    ) -> Result<CmdResult> {
        let matches = candidates.result.listed_books.clone();
        let result = commands::delete::run(&mut candidates.library, &matches, selection)?;
        if !result.affected_books.is_empty() {
            self.save(&candidates.library)?;
        }
        Ok(result)
    }

    pub fn report(&self) -> Result<CmdResult> {
        commands::report::run(&self.load()?)
    }

    pub fn export(&self, format: Format, path: &Path) -> Result<CmdResult> {
        commands::export::run(&self.load()?, format, path, &self.export_options)
    }

    pub fn import(&mut self, format: Format, path: &Path) -> Result<CmdResult> {
        let mut library = self.load()?;
        let result = commands::import::run(&mut library, format, path)?;
        self.save(&library)?;
        Ok(result)
    }
}
