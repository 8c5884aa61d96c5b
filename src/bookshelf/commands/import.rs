use crate::commands::{CmdMessage, CmdResult, Format};
use crate::error::Result;
use crate::model::{Book, Field, Library};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Reads books from `path` and appends them to `library`. Nothing is merged or
/// deduplicated. On any read or parse failure the library is left as it was.
pub fn run(library: &mut Library, format: Format, path: &Path) -> Result<CmdResult> {
    let content = fs::read_to_string(path)?;
    let books = match format {
        Format::Json => parse_json(&content)?,
        Format::Txt => parse_txt(&content),
    };
    tracing::debug!("Parsed {} books from {}", books.len(), path.display());

    let message = CmdMessage::success(format!("Imported {} books successfully.", books.len()));
    library.extend(books.iter().cloned());
    Ok(CmdResult::default()
        .with_affected_books(books)
        .with_message(message))
}

/// Expects an array of objects. Entries without a Title or Author are skipped;
/// other missing fields default to empty.
pub fn parse_json(content: &str) -> Result<Vec<Book>> {
    let value: Value = serde_json::from_str(content)?;
    let entries = value.as_array().ok_or_else(|| {
        <serde_json::Error as serde::de::Error>::custom("expected an array of books")
    })?;

    let mut books = Vec::new();
    for (position, entry) in entries.iter().enumerate() {
        let Some(object) = entry.as_object() else {
            tracing::warn!("Skipping entry {}: not an object", position);
            continue;
        };
        let mut pending = PendingBook::default();
        for field in Field::ALL {
            if let Some(value) = object.get(field.name()) {
                pending.set(field, text_value(value));
            }
        }
        match pending.finish() {
            Some(book) => books.push(book),
            None => tracing::warn!("Skipping entry {}: missing Title or Author", position),
        }
    }
    Ok(books)
}

/// Reads the labeled block layout produced by the txt export. A blank line
/// (or the end of input) closes a block.
pub fn parse_txt(content: &str) -> Vec<Book> {
    let mut books = Vec::new();
    let mut pending = PendingBook::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            books.extend(std::mem::take(&mut pending).finish());
            continue;
        }
        for field in Field::ALL {
            let value = line
                .strip_prefix(field.name())
                .and_then(|rest| rest.strip_prefix(':'));
            if let Some(value) = value {
                pending.set(field, value.trim().to_string());
                break;
            }
        }
    }
    books.extend(pending.finish());
    books
}

fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug, Default)]
struct PendingBook {
    fields: HashMap<Field, String>,
}

impl PendingBook {
    fn set(&mut self, field: Field, value: String) {
        self.fields.insert(field, value);
    }

    fn take(&mut self, field: Field) -> String {
        self.fields.remove(&field).unwrap_or_default()
    }

    /// A book, if both Title and Author are present and non-empty.
    fn finish(mut self) -> Option<Book> {
        let title = self.take(Field::Title);
        let author = self.take(Field::Author);
        if title.trim().is_empty() || author.trim().is_empty() {
            return None;
        }
        Some(Book::new(
            title,
            author,
            self.take(Field::Year),
            self.take(Field::Genre),
            self.take(Field::Rating),
        ))
    }
}
