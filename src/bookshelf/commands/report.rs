use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, Library};
use crate::validation::{stored_rating, stored_year};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    /// Display label; books without a genre count as "Uncategorized".
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct YearExtremes {
    pub oldest_year: i64,
    pub newest_year: i64,
    /// Every book at `oldest_year`, in store order.
    pub oldest: Vec<Book>,
    /// Every book at `newest_year`, in store order.
    pub newest: Vec<Book>,
}

#[derive(Debug, Clone)]
pub struct LibraryReport {
    /// Genres in the order they are first seen.
    pub genre_counts: Vec<GenreCount>,
    /// Mean of parseable ratings, 0.0 when there are none.
    pub average_rating: f64,
    pub rated_count: usize,
    /// `None` when no book has a parseable year.
    pub years: Option<YearExtremes>,
}

pub fn run(library: &Library) -> Result<CmdResult> {
    if library.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(
            "Your library is empty. No reports to generate.",
        )));
    }

    let (average_rating, rated_count) = average_rating(library);
    let report = LibraryReport {
        genre_counts: genre_counts(library),
        average_rating,
        rated_count,
        years: year_extremes(library),
    };
    Ok(CmdResult::default().with_report(report))
}

fn genre_counts(library: &Library) -> Vec<GenreCount> {
    let mut counts: Vec<GenreCount> = Vec::new();
    for book in library {
        let label = book.genre_label();
        match counts.iter_mut().find(|gc| gc.genre == label) {
            Some(gc) => gc.count += 1,
            None => counts.push(GenreCount {
                genre: label.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

fn average_rating(library: &Library) -> (f64, usize) {
    let ratings: Vec<f64> = library
        .iter()
        .filter_map(|book| stored_rating(&book.rating))
        .collect();
    if ratings.is_empty() {
        return (0.0, 0);
    }
    let total: f64 = ratings.iter().sum();
    (total / ratings.len() as f64, ratings.len())
}

fn year_extremes(library: &Library) -> Option<YearExtremes> {
    let dated: Vec<(i64, &Book)> = library
        .iter()
        .filter_map(|book| stored_year(&book.year).map(|year| (year, book)))
        .collect();

    let oldest_year = dated.iter().map(|(year, _)| *year).min()?;
    let newest_year = dated.iter().map(|(year, _)| *year).max()?;

    let at = |target: i64| -> Vec<Book> {
        dated
            .iter()
            .filter(|(year, _)| *year == target)
            .map(|(_, book)| (*book).clone())
            .collect()
    };

    Some(YearExtremes {
        oldest_year,
        newest_year,
        oldest: at(oldest_year),
        newest: at(newest_year),
    })
}
