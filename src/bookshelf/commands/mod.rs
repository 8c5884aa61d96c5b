//! # Command Layer
//!
//! One module per operation. Commands take the loaded [`Library`] as a plain
//! value, never touch the store and never print; the API layer loads before
//! and saves after. Every command returns a [`CmdResult`] the UI renders.

use crate::error::{LibraryError, Result};
use crate::index::DisplayBook;
use crate::model::Book;
use std::fmt;
use std::str::FromStr;

pub mod add;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod report;
pub mod search;

pub use report::LibraryReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<DisplayBook>,
    pub report: Option<LibraryReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_report(mut self, report: LibraryReport) -> Self {
        self.report = Some(report);
        self
    }
}

/// File format for export and import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Txt,
}

impl FromStr for Format {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "txt" => Ok(Format::Txt),
            _ => Err(LibraryError::Format(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Txt => f.write_str("txt"),
        }
    }
}
