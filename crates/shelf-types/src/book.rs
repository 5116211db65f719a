use std::fmt;

use serde::Serialize;

use crate::classification::Classification;
use crate::date::AddedDate;
use crate::id::BookId;
use crate::row::BookRow;

/// One catalog entry.
///
/// `id` and `added_date` are fixed at construction. Title, author, genre and
/// year change only through [`Book::update`]. The classification is derived
/// from the genre when the book is built and kept as-is afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    genre: String,
    year: i32,
    added_date: AddedDate,
    classification: Classification,
}

impl Book {
    /// Build a book. A missing `added_date` means today.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        added_date: Option<AddedDate>,
    ) -> Self {
        let genre = genre.into();
        Self {
            id,
            title: title.into(),
            author: author.into(),
            classification: Classification::from_genre(&genre),
            genre,
            year,
            added_date: added_date.unwrap_or_else(AddedDate::today),
        }
    }

    /// Rebuild a book from a persisted row. The date is taken verbatim.
    pub fn from_row(row: BookRow) -> Self {
        Self::new(
            BookId::new(row.book_id),
            row.title,
            row.author,
            row.genre,
            row.year,
            Some(AddedDate::new(row.added_date)),
        )
    }

    /// Flatten into the persisted row. The classification is not persisted.
    pub fn to_row(&self) -> BookRow {
        BookRow {
            book_id: self.id.get(),
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            year: self.year,
            added_date: self.added_date.as_str().to_string(),
        }
    }

    /// Apply a patch in place. Empty text and `None` leave a field alone.
    pub fn update(&mut self, patch: &BookPatch) {
        if let Some(title) = non_empty(&patch.title) {
            self.title = title.to_string();
        }
        if let Some(author) = non_empty(&patch.author) {
            self.author = author.to_string();
        }
        if let Some(genre) = non_empty(&patch.genre) {
            self.genre = genre.to_string();
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn added_date(&self) -> &AddedDate {
        &self.added_date
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn is_fiction(&self) -> bool {
        self.classification.is_fiction()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} by {} ({}) - Genre: {} (Added: {})",
            self.id, self.title, self.author, self.year, self.genre, self.added_date
        )
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Replacement values for an update. Unset fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

impl BookPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Returns `true` if applying this patch cannot change any book.
    pub fn is_empty(&self) -> bool {
        non_empty(&self.title).is_none()
            && non_empty(&self.author).is_none()
            && non_empty(&self.genre).is_none()
            && self.year.is_none()
    }
}
