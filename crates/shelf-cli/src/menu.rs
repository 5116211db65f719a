//! The numbered interactive menu.
//!
//! Reads one trimmed line per prompt. Bad numeric input abandons the
//! current action and returns to the menu; end of input exits.

use std::io::{self, BufRead, Write};

use shelf_store::{Catalog, RecordFile, StoreError};
use shelf_types::{Book, BookId, BookPatch, ListCriteria, SearchField};

use crate::render;

/// Whether the menu loop should keep going after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'c, F: RecordFile, R, W> {
    catalog: &'c mut Catalog<F>,
    input: R,
    out: W,
}

impl<'c, F: RecordFile, R: BufRead, W: Write> Menu<'c, F, R, W> {
    pub fn new(catalog: &'c mut Catalog<F>, input: R, out: W) -> Self {
        Self {
            catalog,
            input,
            out,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice (1-9): ")? else {
                return Ok(());
            };
            let flow = match choice.as_str() {
                "1" => self.add()?,
                "2" => self.search()?,
                "3" => self.update()?,
                "4" => self.remove()?,
                "5" => self.display_all()?,
                "6" => self.display_by_criteria()?,
                "7" => {
                    let authors = self.catalog.unique_authors();
                    render::names(&mut self.out, "Unique authors:", &authors)?;
                    Flow::Continue
                }
                "8" => {
                    let genres = self.catalog.unique_genres();
                    render::names(&mut self.out, "Unique genres:", &genres)?;
                    Flow::Continue
                }
                "9" => {
                    writeln!(self.out, "Exiting program. Goodbye!")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.out, "Invalid choice. Please select a valid option.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nLibrary Management System")?;
        writeln!(self.out, "1. Add new book")?;
        writeln!(self.out, "2. Search books")?;
        writeln!(self.out, "3. Update book")?;
        writeln!(self.out, "4. Remove book")?;
        writeln!(self.out, "5. Display all books")?;
        writeln!(self.out, "6. Display books by criteria")?;
        writeln!(self.out, "7. Show unique authors")?;
        writeln!(self.out, "8. Show unique genres")?;
        writeln!(self.out, "9. Exit")
    }

    /// Print `label`, read one line, trim it. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report_book(&mut self, message: &str, book: &Book) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        writeln!(self.out, "{book}")
    }

    fn report_save_error(&mut self, err: &StoreError) -> io::Result<()> {
        writeln!(self.out, "Error saving books: {err}")
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(title) = self.prompt("Enter book title: ")? else { return Ok(Flow::Exit) };
        let Some(author) = self.prompt("Enter book author: ")? else { return Ok(Flow::Exit) };
        let Some(genre) = self.prompt("Enter book genre: ")? else { return Ok(Flow::Exit) };
        let Some(year) = self.prompt("Enter publication year: ")? else { return Ok(Flow::Exit) };
        let Ok(year) = year.parse::<i32>() else {
            writeln!(self.out, "Invalid year. Please enter a valid number.")?;
            return Ok(Flow::Continue);
        };

        match self.catalog.add(title, author, genre, year) {
            Ok(book) => self.report_book("Book added:", &book)?,
            Err(e) => self.report_save_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        let Some(field) = self.prompt("Search by (title/author/genre): ")? else {
            return Ok(Flow::Exit);
        };
        let field = match field.parse::<SearchField>() {
            Ok(field) => field,
            Err(_) => {
                writeln!(self.out, "Invalid search field. Defaulting to title.")?;
                SearchField::Title
            }
        };
        let Some(query) = self.prompt(&format!("Enter {field} to search: "))? else {
            return Ok(Flow::Exit);
        };

        let results = self.catalog.search(&query, field);
        render::books(&mut self.out, "Search results:", &results, "No books found.")?;
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter book ID to update: ")? else { return Ok(Flow::Exit) };
        let Ok(id) = id.parse::<BookId>() else {
            writeln!(self.out, "Invalid book ID.")?;
            return Ok(Flow::Continue);
        };

        writeln!(self.out, "Leave field empty if you don't want to update it.")?;
        let Some(title) = self.prompt("Enter new title: ")? else { return Ok(Flow::Exit) };
        let Some(author) = self.prompt("Enter new author: ")? else { return Ok(Flow::Exit) };
        let Some(genre) = self.prompt("Enter new genre: ")? else { return Ok(Flow::Exit) };
        let Some(year) = self.prompt("Enter new publication year (only the year): ")? else {
            return Ok(Flow::Exit);
        };
        let year = if year.is_empty() {
            None
        } else {
            match year.parse::<i32>() {
                Ok(year) => Some(year),
                Err(_) => {
                    writeln!(self.out, "Invalid year input (list only the year).")?;
                    return Ok(Flow::Continue);
                }
            }
        };

        let patch = BookPatch {
            title: non_blank(title),
            author: non_blank(author),
            genre: non_blank(genre),
            year,
        };
        match self.catalog.update(id, &patch) {
            Ok(Some(book)) => self.report_book("Book updated:", &book)?,
            Ok(None) => writeln!(self.out, "Book ID not found.")?,
            Err(e) => self.report_save_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter book ID to remove: ")? else { return Ok(Flow::Exit) };
        let Ok(id) = id.parse::<BookId>() else {
            writeln!(self.out, "Invalid book ID.")?;
            return Ok(Flow::Continue);
        };

        match self.catalog.remove(id) {
            Ok(Some(book)) => self.report_book("Book removed:", &book)?,
            Ok(None) => writeln!(self.out, "Book ID not found.")?,
            Err(e) => self.report_save_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn display_all(&mut self) -> io::Result<Flow> {
        let listing = self.catalog.list(None);
        render::listing(&mut self.out, "Books in the library:", &listing)?;
        Ok(Flow::Continue)
    }

    fn display_by_criteria(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "Display by criteria:")?;
        writeln!(self.out, "a. Recently added")?;
        writeln!(self.out, "b. By genre")?;
        let Some(choice) = self.prompt("Enter choice (a/b): ")? else { return Ok(Flow::Exit) };

        let criteria = match choice.to_lowercase().as_str() {
            "a" => ListCriteria::Recent,
            "b" => ListCriteria::Genre,
            _ => {
                writeln!(self.out, "Invalid criteria choice.")?;
                return Ok(Flow::Continue);
            }
        };
        let listing = self.catalog.list(Some(criteria));
        render::listing(&mut self.out, "Recently added books:", &listing)?;
        Ok(Flow::Continue)
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
