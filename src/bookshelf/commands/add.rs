use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, Library};
use crate::validation;

/// Raw field input for a new book, as typed.
#[derive(Debug, Clone, Default)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub rating: String,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    /// Validates every field, failing on the first rejected one.
    pub fn validate(&self, current_year: i32) -> Result<Book> {
        let title = validation::required("Title", &self.title)?;
        let author = validation::required("Author", &self.author)?;
        let year = validation::year(&self.year, current_year)?;
        let rating = validation::rating(&self.rating)?;
        Ok(Book::new(title, author, year, self.genre.trim(), rating))
    }
}

pub fn run(library: &mut Library, new_book: &NewBook, current_year: i32) -> Result<CmdResult> {
    let book = new_book.validate(current_year)?;
    tracing::debug!("Adding book {:?}", book.title);

    let message = CmdMessage::success(format!("Book '{}' added successfully!", book.title));
    library.push(book.clone());

    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(message))
}
