use crate::commands::{CmdMessage, CmdResult, Format};
use crate::error::Result;
use crate::model::{Book, Field, Library};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub json_indent: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { json_indent: 4 }
    }
}

pub fn run(
    library: &Library,
    format: Format,
    path: &Path,
    options: &ExportOptions,
) -> Result<CmdResult> {
    if library.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(
            "Your library is empty. Nothing to export.",
        )));
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    match format {
        Format::Json => write_json(&mut writer, library.books(), options.json_indent)?,
        Format::Txt => write_txt(&mut writer, library.books())?,
    }
    writer.flush()?;
    tracing::debug!("Exported {} books as {} to {}", library.len(), format, path.display());

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Library exported to {} successfully.",
        path.display()
    ))))
}

/// Array of five-field objects, all values as strings.
pub(crate) fn write_json<W: Write>(writer: W, books: &[Book], indent: usize) -> Result<()> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    books.serialize(&mut serializer)?;
    Ok(())
}

/// One `Label: value` line per field, a blank line after each book.
pub(crate) fn write_txt<W: Write>(mut writer: W, books: &[Book]) -> Result<()> {
    for book in books {
        for field in Field::ALL {
            writeln!(writer, "{}: {}", field, book.get(field))?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
