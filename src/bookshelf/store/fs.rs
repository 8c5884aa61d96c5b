use super::DataStore;
use crate::error::{LibraryError, Result};
use crate::model::{Book, Library, FIELD_NAMES};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn write_books(&self, books: &[Book]) -> Result<()> {
        self.ensure_parent_dir()?;
        let file = File::create(&self.path)?;
        write_csv(file, books)
    }
}

/// Writes the header row followed by one row per book.
pub(crate) fn write_csv<W: Write>(writer: W, books: &[Book]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    csv_writer.write_record(FIELD_NAMES)?;
    for book in books {
        csv_writer.serialize(book)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Reads rows by header name; missing Year, Genre or Rating columns read as empty.
pub(crate) fn read_csv<R: io::Read>(reader: R) -> Result<Vec<Book>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let mut books = Vec::new();
    for row in csv_reader.deserialize() {
        let book: Book = row?;
        books.push(book);
    }
    Ok(books)
}

impl DataStore for CsvStore {
    fn load(&self) -> Result<Library> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("Store {} not found, creating it", self.path.display());
                self.write_books(&[])?;
                return Ok(Library::default());
            }
            Err(e) => return Err(LibraryError::Io(e)),
        };

        let books = read_csv(file)?;
        tracing::debug!("Loaded {} books from {}", books.len(), self.path.display());
        Ok(Library::new(books))
    }

    fn save(&mut self, library: &Library) -> Result<()> {
        self.write_books(library.books())?;
        tracing::debug!("Saved {} books to {}", library.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, CsvStore) {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path().join("library.csv"));
        (dir, store)
    }

    #[test]
    fn missing_store_is_created_with_header_only() {
        let (_dir, store) = setup();
        let library = store.load().unwrap();

        assert!(library.is_empty());
        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, "Title,Author,Year,Genre,Rating\r\n");
    }

    #[test]
    fn save_then_load_preserves_order_and_values() {
        let (_dir, mut store) = setup();
        let library = Library::new(vec![
            Book::new("Dune", "Herbert", "1965", "Sci-Fi", "4.8"),
            Book::new("Guns, Germs, and Steel", "Diamond", "1997", "", ""),
            Book::new("Quoted \"Title\"", "Someone", "", "Line\nBreak", "3.0"),
        ]);
        store.save(&library).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 3);
        for (a, b) in library.iter().zip(loaded.iter()) {
            assert!(a.same_fields(b));
        }
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let (_dir, mut store) = setup();
        store
            .save(&Library::new(vec![
                Book::new("A", "X", "", "", ""),
                Book::new("B", "Y", "", "", ""),
            ]))
            .unwrap();
        store
            .save(&Library::new(vec![Book::new("C", "Z", "", "", "")]))
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.books()[0].title, "C");
    }

    #[test]
    fn quotes_embedded_commas() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[Book::new("A, B", "C", "2000", "", "")]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Title,Author,Year,Genre,Rating\r\n\"A, B\",C,2000,,\r\n"
        );
    }

    #[test]
    fn missing_optional_columns_read_as_empty() {
        let data = "Title,Author\nDune,Herbert\n";
        let books = read_csv(data.as_bytes()).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].year, "");
        assert_eq!(books[0].rating, "");
    }

    #[test]
    fn header_only_file_is_empty_library() {
        let books = read_csv("Title,Author,Year,Genre,Rating\r\n".as_bytes()).unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn corrupt_store_propagates() {
        let (_dir, store) = setup();
        fs::write(store.path(), "Author,Year\nHerbert,1965\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, LibraryError::Csv(_)));
        // The broken file is left as it was.
        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, "Author,Year\nHerbert,1965\n");
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut store = CsvStore::new(dir.path().join("nested/deeper/library.csv"));
        store.save(&Library::default()).unwrap();
        assert!(store.path().exists());
    }
}
