use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Header row of the store, in column order.
pub const FIELD_NAMES: [&str; 5] = ["Title", "Author", "Year", "Genre", "Rating"];

/// Label shown for books stored without a genre.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Year,
    Genre,
    Rating,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Author,
        Field::Year,
        Field::Genre,
        Field::Rating,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Year => "Year",
            Field::Genre => "Genre",
            Field::Rating => "Rating",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One catalog entry. Every data field is kept as text, exactly as stored.
///
/// `id` only identifies a record for the lifetime of a loaded [`Library`]; it
/// is never written to the store or to exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Rating", default)]
    pub rating: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            rating: rating.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Year => &self.year,
            Field::Genre => &self.genre,
            Field::Rating => &self.rating,
        }
    }

    /// Field values in column order.
    pub fn values(&self) -> [&str; 5] {
        Field::ALL.map(|field| self.get(field))
    }

    /// Genre as displayed, with the empty genre shown as [`UNCATEGORIZED`].
    pub fn genre_label(&self) -> &str {
        if self.genre.is_empty() {
            UNCATEGORIZED
        } else {
            &self.genre
        }
    }

    /// `Title by Author (Year)`
    pub fn short_line(&self) -> String {
        format!("{} by {} ({})", self.title, self.author, self.year)
    }

    /// Compares the five data fields, ignoring the synthetic id.
    pub fn same_fields(&self, other: &Book) -> bool {
        self.values() == other.values()
    }
}

/// `Title by Author (Year) - Genre: G, Rating: R`
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}) - Genre: {}, Rating: {}",
            self.title, self.author, self.year, self.genre, self.rating
        )
    }
}

/// The full ordered collection, in store order.
#[derive(Debug, Clone, Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn extend(&mut self, books: impl IntoIterator<Item = Book>) {
        self.books.extend(books);
    }

    /// Removes every book whose id is in `ids`, returning the removed books in
    /// store order.
    pub fn remove_ids(&mut self, ids: &[Uuid]) -> Vec<Book> {
        let (removed, kept): (Vec<Book>, Vec<Book>) = std::mem::take(&mut self.books)
            .into_iter()
            .partition(|book| ids.contains(&book.id));
        self.books = kept;
        removed
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
