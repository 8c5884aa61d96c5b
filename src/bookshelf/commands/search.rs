use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Field, Library};

use super::helpers::matching_books;

/// Books where `term` occurs, case-insensitively, in any of the five fields.
/// Matches keep store order and are numbered within the match list.
pub fn run(library: &Library, term: &str) -> Result<CmdResult> {
    let listed = matching_books(library, term, &Field::ALL);
    tracing::debug!("Search {:?} matched {} books", term, listed.len());

    if listed.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No matching books found.")));
    }

    let header = CmdMessage::info(format!("Found {} matching books:", listed.len()));
    Ok(CmdResult::default()
        .with_message(header)
        .with_listed_books(listed))
}
