use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::index::{DisplayBook, Selection};
use crate::model::{Field, Library};

use super::helpers::matching_books;

/// Candidates for deletion: books whose title contains `term`. Unlike search,
/// no other field is considered.
pub fn find(library: &Library, term: &str) -> Result<CmdResult> {
    let listed = matching_books(library, term, &[Field::Title]);

    if listed.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info("No books found with that title.")));
    }

    Ok(CmdResult::default()
        .with_message(CmdMessage::info("Matching books:"))
        .with_listed_books(listed))
}

/// Removes the selected entries of `matches` from `library`.
///
/// Books are removed by id, so selecting one of several identical records
/// removes only that one. A selection that names no valid entry fails with
/// [`LibraryError::Selection`] and leaves the library untouched.
pub fn run(
    library: &mut Library,
    matches: &[DisplayBook],
    selection: &Selection,
) -> Result<CmdResult> {
    if *selection == Selection::Cancel {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Deletion cancelled.")));
    }

    let picked = selection.resolve(matches);
    if picked.is_empty() {
        return Err(LibraryError::Selection(
            "No valid indices entered.".to_string(),
        ));
    }

    let ids: Vec<_> = picked.iter().map(|dp| dp.book.id).collect();
    let removed = library.remove_ids(&ids);
    tracing::debug!("Deleted {} of {} selected books", removed.len(), ids.len());

    let message = CmdMessage::success(format!("Deleted {} books.", removed.len()));
    Ok(CmdResult::default()
        .with_affected_books(removed)
        .with_message(message))
}
