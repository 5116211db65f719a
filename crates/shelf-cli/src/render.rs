//! Text and JSON output shared by the menu and the one-shot commands.

use std::collections::BTreeSet;
use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use shelf_store::Listing;
use shelf_types::Book;

pub fn books<W: Write>(out: &mut W, heading: &str, books: &[&Book], when_empty: &str) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "{when_empty}");
    }
    writeln!(out, "{}", heading.bold())?;
    for book in books {
        writeln!(out, "{book}")?;
    }
    Ok(())
}

pub fn listing<W: Write>(out: &mut W, heading: &str, listing: &Listing<'_>) -> io::Result<()> {
    match listing {
        Listing::Books(list) => books(out, heading, list, "No books in the library."),
        Listing::ByGenre(groups) => {
            if groups.is_empty() {
                return writeln!(out, "No books in the library.");
            }
            for group in groups {
                writeln!(out, "\n{} {}", "Genre:".bold(), group.genre.cyan())?;
                for book in &group.books {
                    writeln!(out, "{book}")?;
                }
            }
            Ok(())
        }
    }
}

pub fn names<W: Write>(out: &mut W, heading: &str, names: &BTreeSet<&str>) -> io::Result<()> {
    writeln!(out, "{}", heading.bold())?;
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

pub fn success<W: Write>(out: &mut W, message: &str, book: &Book) -> io::Result<()> {
    writeln!(out, "{} {}", "✓".green().bold(), message)?;
    writeln!(out, "{book}")
}

pub fn json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
