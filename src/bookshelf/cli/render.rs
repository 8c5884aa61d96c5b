use super::console::Console;
use bookshelf::commands::LibraryReport;
use bookshelf::error::Result;
use bookshelf::index::DisplayBook;
use colored::Colorize;
use std::io::{BufRead, Write};

/// `1. Title by Author (Year) - Genre: G, Rating: R`
pub fn full_lines<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    books: &[DisplayBook],
) -> Result<()> {
    for dp in books {
        console.line(format!("{}. {}", dp.index.to_string().yellow(), dp.book))?;
    }
    Ok(())
}

/// `1. Title by Author (Year)`
pub fn short_lines<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    books: &[DisplayBook],
) -> Result<()> {
    for dp in books {
        console.line(format!(
            "{}. {}",
            dp.index.to_string().yellow(),
            dp.book.short_line()
        ))?;
    }
    Ok(())
}

pub fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    report: &LibraryReport,
) -> Result<()> {
    console.heading("--- Genre Report ---")?;
    for gc in &report.genre_counts {
        console.line(format!("{}: {} book(s)", gc.genre, gc.count))?;
    }

    console.heading("--- Average Rating ---")?;
    console.line(format!(
        "{:.2} (from {} rated books)",
        report.average_rating, report.rated_count
    ))?;

    match &report.years {
        Some(years) => {
            console.heading("--- Oldest Book(s) ---")?;
            for book in &years.oldest {
                console.line(book.short_line())?;
            }
            console.heading("--- Newest Book(s) ---")?;
            for book in &years.newest {
                console.line(book.short_line())?;
            }
        }
        None => {
            console.blank()?;
            console.line("No publication years available for oldest/newest report.")?;
        }
    }
    Ok(())
}
