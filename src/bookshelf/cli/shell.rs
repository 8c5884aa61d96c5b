//! The interactive menu.
//!
//! Every choice runs one operation to completion before the menu is shown
//! again. Retry loops (invalid year, bad delete selection) live here; the
//! library only reports what was wrong.
//!
//! End of input is treated as choosing Exit, whether it arrives at the menu
//! or in the middle of an operation. An interrupted operation saves nothing.

use super::console::Console;
use super::render;
use bookshelf::api::{LibraryApi, NewBook};
use bookshelf::commands::Format;
use bookshelf::error::{LibraryError, Result};
use bookshelf::index::Selection;
use bookshelf::store::DataStore;
use bookshelf::validation;
use std::io::{BufRead, Write};
use std::path::Path;

const MENU: [&str; 8] = [
    "Add a book",
    "List all books",
    "Search for a book",
    "Delete a book",
    "Generate reports",
    "Export library",
    "Import library",
    "Exit",
];

pub struct Shell<S: DataStore, R, W> {
    api: LibraryApi<S>,
    console: Console<R, W>,
}

impl<S: DataStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: LibraryApi<S>, console: Console<R, W>) -> Self {
        Self { api, console }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let choice = match self.console.prompt("Enter your choice: ") {
                Ok(choice) => choice,
                Err(LibraryError::InputClosed) => return self.farewell(),
                Err(e) => return Err(e),
            };
            tracing::debug!("Menu choice {:?}", choice);

            let outcome = match choice.as_str() {
                "1" => self.add(),
                "2" => self.list(),
                "3" => self.search(),
                "4" => self.delete(),
                "5" => self.report(),
                "6" => self.export(),
                "7" => self.import(),
                "8" => return self.farewell(),
                _ => self
                    .console
                    .error("Invalid choice. Please enter a number between 1-8."),
            };

            match outcome {
                Ok(()) => {}
                Err(LibraryError::InputClosed) => return self.farewell(),
                Err(e) => return Err(e),
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        self.console.heading("--- Personal Library Manager ---")?;
        for (i, entry) in MENU.iter().enumerate() {
            self.console.line(format!("{}. {}", i + 1, entry))?;
        }
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        self.console.line("Goodbye!")
    }

    fn add(&mut self) -> Result<()> {
        let current_year = self.api.current_year();
        let console = &mut self.console;

        let title = console.prompt_until("Enter the book's title: ", |s| {
            validation::required("Title", s)
        })?;
        let author = console.prompt_until("Enter the author's name: ", |s| {
            validation::required("Author", s)
        })?;
        let year = console.prompt_until("Enter the publication year (optional): ", |s| {
            validation::year(s, current_year)
        })?;
        let genre = console.prompt("Enter the genre (optional): ")?;
        let rating =
            console.prompt_until("Enter the rating (0-5, optional): ", validation::rating)?;

        let new_book = NewBook::new(title, author)
            .year(year)
            .genre(genre)
            .rating(rating);
        let result = self.api.add_book(&new_book)?;
        self.console.messages(&result.messages)
    }

    fn list(&mut self) -> Result<()> {
        let result = self.api.list_books()?;
        if !result.listed_books.is_empty() {
            self.console.heading("--- Your Library ---")?;
            render::full_lines(&mut self.console, &result.listed_books)?;
        }
        self.console.messages(&result.messages)?;
        if !result.listed_books.is_empty() {
            self.console.blank()?;
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let term = self.console.prompt("Enter a search term: ")?;
        let result = self.api.search_books(&term)?;
        if !result.listed_books.is_empty() {
            self.console.blank()?;
        }
        self.console.messages(&result.messages)?;
        render::full_lines(&mut self.console, &result.listed_books)
    }

    fn delete(&mut self) -> Result<()> {
        let term = self.console.prompt("Enter the title to delete: ")?;
        let mut candidates = self.api.delete_candidates(&term)?;
        self.console.messages(&candidates.result.messages)?;
        if candidates.matches().is_empty() {
            return Ok(());
        }
        render::short_lines(&mut self.console, candidates.matches())?;

        loop {
            let answer = self
                .console
                .prompt("Enter numbers to delete (comma-separated), 'all', or 'cancel': ")?;
            let outcome = answer
                .parse::<Selection>()
                .and_then(|selection| self.api.delete_books(&mut candidates, &selection));
            match outcome {
                Ok(result) => return self.console.messages(&result.messages),
                Err(LibraryError::Selection(reason)) => self.console.warning(&reason)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn report(&mut self) -> Result<()> {
        let result = self.api.report()?;
        self.console.messages(&result.messages)?;
        if let Some(report) = &result.report {
            render::report(&mut self.console, report)?;
        }
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        if self.api.load()?.is_empty() {
            return self
                .console
                .line("Your library is empty. Nothing to export.");
        }

        let Some((format, filename)) = self.transfer_target("export")? else {
            return Ok(());
        };
        match self.api.export(format, Path::new(&filename)) {
            Ok(result) => self.console.messages(&result.messages),
            Err(e) => self.console.error(&format!("Error exporting: {}", e)),
        }
    }

    fn import(&mut self) -> Result<()> {
        let Some((format, filename)) = self.transfer_target("import")? else {
            return Ok(());
        };
        match self.api.import(format, Path::new(&filename)) {
            Ok(result) => self.console.messages(&result.messages),
            Err(e) => self.console.error(&format!("Error importing: {}", e)),
        }
    }

    /// Asks for a format and filename. A bad answer to either is reported once
    /// and yields `None`; there is no retry.
    fn transfer_target(&mut self, verb: &str) -> Result<Option<(Format, String)>> {
        let answer = self
            .console
            .prompt(&format!("Enter {} format (json/txt): ", verb))?;
        let format = match answer.parse::<Format>() {
            Ok(format) => format,
            Err(e) => {
                self.console.error(&e.to_string())?;
                return Ok(None);
            }
        };

        let filename = self.console.prompt("Enter filename: ")?;
        if filename.is_empty() {
            self.console.error("Filename cannot be empty.")?;
            return Ok(None);
        }
        Ok(Some((format, filename)))
    }
}
