use super::DataStore;
use crate::error::Result;
use crate::model::{Book, Library};

/// Store that keeps the collection in memory. Loads hand out fresh copies,
/// so ids change between loads just as they do with the CSV store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books, saves: 0 }
    }

    /// Number of times [`DataStore::save`] has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Library> {
        let books = self
            .books
            .iter()
            .map(|b| Book::new(&*b.title, &*b.author, &*b.year, &*b.genre, &*b.rating))
            .collect();
        Ok(Library::new(books))
    }

    fn save(&mut self, library: &Library) -> Result<()> {
        self.books = library.books().to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Small collection used across command tests.
    pub fn sample_books() -> Vec<Book> {
        vec![
            Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", "4.8"),
            Book::new("Emma", "Jane Austen", "1815", "Classic", "4.0"),
            Book::new("Dune Messiah", "Frank Herbert", "1969", "Sci-Fi", ""),
            Book::new("Notes", "Anon", "", "", "bad"),
        ]
    }

    pub fn sample_library() -> Library {
        Library::new(sample_books())
    }

    pub fn sample_store() -> InMemoryStore {
        InMemoryStore::with_books(sample_books())
    }
}
