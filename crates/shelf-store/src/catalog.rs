//! The write-through catalog store.
//!
//! A [`Catalog`] holds every book in an `IndexMap` keyed by id, in the order
//! the rows were read or added. Each mutating call changes the map first and
//! then rewrites the whole backing file in that order, so a failed save leaves
//! memory ahead of disk until the next successful one.

use std::collections::BTreeSet;
use std::path::PathBuf;

use indexmap::IndexMap;
use shelf_types::{Book, BookId, BookPatch, ListCriteria, SearchField};
use tracing::{debug, info, warn};

use crate::csv_file::CsvFile;
use crate::error::{StoreError, StoreResult};
use crate::listing::{group_by_genre, newest_first, GenreGroup, Listing};
use crate::traits::RecordFile;

/// What happened when the catalog read its backing file at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file existed and this many books were read from it.
    Loaded { books: usize },
    /// There was no file yet; the catalog starts empty.
    Missing,
}

/// The owner of every book in a library.
pub struct Catalog<F: RecordFile = CsvFile> {
    books: IndexMap<BookId, Book>,
    /// `None` once `u32::MAX` has been assigned.
    next_id: Option<BookId>,
    file: F,
    load_status: LoadStatus,
}

impl<F: RecordFile> std::fmt::Debug for Catalog<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("location", &self.file.location())
            .field("books", &self.books.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Catalog<CsvFile> {
    /// Open the catalog stored in the CSV file at `path`.
    ///
    /// A file that does not exist yet is not an error; it is created on the
    /// first save.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::with_file(CsvFile::new(path))
    }
}

impl<F: RecordFile> Catalog<F> {
    /// Build a catalog over the given backing storage and load it.
    pub fn with_file(file: F) -> StoreResult<Self> {
        let mut catalog = Self {
            books: IndexMap::new(),
            next_id: Some(BookId::FIRST),
            file,
            load_status: LoadStatus::Missing,
        };
        catalog.load()?;
        Ok(catalog)
    }

    fn load(&mut self) -> StoreResult<()> {
        let Some(rows) = self.file.read_rows()? else {
            info!(
                location = %self.file.location(),
                "catalog file not found; starting with an empty library"
            );
            self.load_status = LoadStatus::Missing;
            return Ok(());
        };

        for row in rows {
            let book = Book::from_row(row);
            let id = book.id();
            if self.next_id.is_some_and(|next| id >= next) {
                self.next_id = id.next();
            }
            if self.books.insert(id, book).is_some() {
                warn!(%id, "duplicate book id in catalog file; keeping the later row");
            }
        }

        self.load_status = LoadStatus::Loaded {
            books: self.books.len(),
        };
        debug!(books = self.books.len(), next_id = ?self.next_id, "catalog loaded");
        Ok(())
    }

    /// Rewrite the backing file from the in-memory collection.
    ///
    /// On failure nothing in memory is undone; the error is logged and
    /// returned so the caller can decide whether to retry.
    pub fn save(&self) -> StoreResult<()> {
        let rows: Vec<_> = self.books.values().map(Book::to_row).collect();
        self.file.write_rows(&rows).inspect_err(|e| {
            warn!(location = %self.file.location(), error = %e, "failed to save catalog");
        })
    }

    // ---------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------

    /// Add a new book dated today and persist the catalog.
    ///
    /// The book keeps its id even if the save fails. Once the id space is
    /// used up this fails with [`StoreError::IdsExhausted`] and nothing changes.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> StoreResult<Book> {
        let Some(id) = self.next_id else {
            warn!("book ids exhausted; refusing to add");
            return Err(StoreError::IdsExhausted);
        };
        let book = Book::new(id, title, author, genre, year, None);
        self.books.insert(id, book.clone());
        self.next_id = id.next();
        debug!(%id, fiction = book.is_fiction(), "book added");

        self.save()?;
        Ok(book)
    }

    /// Apply `patch` to the book with `id` and persist the catalog.
    ///
    /// Returns `Ok(None)` if there is no such book.
    pub fn update(&mut self, id: BookId, patch: &BookPatch) -> StoreResult<Option<Book>> {
        let Some(book) = self.books.get_mut(&id) else {
            warn!(%id, "book id not found");
            return Ok(None);
        };
        book.update(patch);
        let updated = book.clone();
        debug!(%id, "book updated");

        self.save()?;
        Ok(Some(updated))
    }

    /// Remove the book with `id` and persist the catalog.
    ///
    /// Returns `Ok(None)` if there is no such book.
    pub fn remove(&mut self, id: BookId) -> StoreResult<Option<Book>> {
        let Some(removed) = self.books.shift_remove(&id) else {
            warn!(%id, "book id not found");
            return Ok(None);
        };
        debug!(%id, "book removed");

        self.save()?;
        Ok(Some(removed))
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    /// Case-insensitive substring search on one field.
    pub fn search(&self, query: &str, field: SearchField) -> Vec<&Book> {
        let query = query.to_lowercase();
        self.books
            .values()
            .filter(|book| field.value(book).to_lowercase().contains(&query))
            .collect()
    }

    /// List the catalog, optionally reordered or grouped.
    pub fn list(&self, criteria: Option<ListCriteria>) -> Listing<'_> {
        match criteria {
            None => Listing::Books(self.all()),
            Some(ListCriteria::Recent) => Listing::Books(self.recent()),
            Some(ListCriteria::Genre) => Listing::ByGenre(self.by_genre()),
        }
    }

    /// Every book in catalog order.
    pub fn all(&self) -> Vec<&Book> {
        self.books.values().collect()
    }

    /// Every book, most recently added first.
    pub fn recent(&self) -> Vec<&Book> {
        newest_first(self.books.values())
    }

    /// Every book grouped by exact genre string.
    pub fn by_genre(&self) -> Vec<GenreGroup<'_>> {
        group_by_genre(self.books.values())
    }

    pub fn unique_authors(&self) -> BTreeSet<&str> {
        self.books.values().map(Book::author).collect()
    }

    pub fn unique_genres(&self) -> BTreeSet<&str> {
        self.books.values().map(Book::genre).collect()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The id the next added book will receive, if any are left.
    pub fn next_id(&self) -> Option<BookId> {
        self.next_id
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    /// Where the backing file lives, for messages.
    pub fn location(&self) -> String {
        self.file.location()
    }

    pub fn file(&self) -> &F {
        &self.file
    }
}
