//! # Display Indexes
//!
//! Listings number their books from 1. The number is a position in the list
//! being shown, not in the store: a search that matches the 3rd and 7th books
//! of the collection shows them as 1 and 2, and a delete selection refers to
//! those numbers.
//!
//! Because the number is only meaningful for the list it was shown with,
//! anything that acts on a selection resolves it to book ids against that same
//! list (see [`Selection`]).

use crate::error::{LibraryError, Result};
use crate::model::Book;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct DisplayBook {
    pub index: usize,
    pub book: Book,
}

/// Numbers books from 1 in the order given.
pub fn index_books<I>(books: I) -> Vec<DisplayBook>
where
    I: IntoIterator<Item = Book>,
{
    books
        .into_iter()
        .enumerate()
        .map(|(i, book)| DisplayBook { index: i + 1, book })
        .collect()
}

/// What the user chose to delete from a match list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Cancel,
    All,
    /// 1-based positions as typed; may include positions outside the list.
    Indices(Vec<i64>),
}

impl FromStr for Selection {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim().to_lowercase();
        match input.as_str() {
            "cancel" => return Ok(Selection::Cancel),
            "all" => return Ok(Selection::All),
            _ => {}
        }

        input
            .split(',')
            .map(|token| token.trim().parse::<i64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Selection::Indices)
            .map_err(|_| {
                LibraryError::Selection(
                    "Invalid input. Please enter numbers separated by commas.".to_string(),
                )
            })
    }
}

impl Selection {
    /// Resolves the selection against the list it was made from. Positions
    /// outside the list are dropped and repeats count once.
    pub fn resolve<'a>(&self, matches: &'a [DisplayBook]) -> Vec<&'a DisplayBook> {
        match self {
            Selection::Cancel => Vec::new(),
            Selection::All => matches.iter().collect(),
            Selection::Indices(indices) => {
                let mut picked: Vec<&DisplayBook> = Vec::new();
                for &idx in indices {
                    if let Some(dp) = matches.iter().find(|dp| dp.index as i64 == idx) {
                        if !picked.iter().any(|p| p.index == dp.index) {
                            picked.push(dp);
                        }
                    }
                }
                picked
            }
        }
    }
}
