use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_books;
use crate::model::Library;

pub fn run(library: &Library) -> Result<CmdResult> {
    if library.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Your library is empty.")));
    }

    let listed = index_books(library.iter().cloned());
    let total = CmdMessage::info(format!("Total books: {}", listed.len()));
    Ok(CmdResult::default()
        .with_listed_books(listed)
        .with_message(total))
}
