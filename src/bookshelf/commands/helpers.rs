use crate::index::{index_books, DisplayBook};
use crate::model::{Book, Field, Library};

/// Case-folded substring test against the given fields.
pub fn matches_any(book: &Book, term_lower: &str, fields: &[Field]) -> bool {
    fields
        .iter()
        .any(|&field| book.get(field).to_lowercase().contains(term_lower))
}

/// Books matching `term` in any of `fields`, numbered from 1 in store order.
pub fn matching_books(library: &Library, term: &str, fields: &[Field]) -> Vec<DisplayBook> {
    let term_lower = term.trim().to_lowercase();
    index_books(
        library
            .iter()
            .filter(|book| matches_any(book, &term_lower, fields))
            .cloned(),
    )
}
