//! Foundation types for Shelf, a single-user library catalog.
//!
//! This crate provides the record-level types used by the catalog store and
//! the command-line front end. It has no I/O of its own.
//!
//! # Key Types
//!
//! - [`Book`] -- One catalog entry, with a classification derived at construction
//! - [`BookId`] -- Store-assigned positive identifier
//! - [`BookPatch`] -- Partial replacement applied by an update
//! - [`BookRow`] -- Flat persisted form of a book (one CSV row)
//! - [`AddedDate`] -- `YYYY-MM-DD` date the book entered the catalog
//! - [`Classification`] -- Fiction / non-fiction flag derived from the genre
//! - [`SearchField`] -- The fields a search may match against
//! - [`ListCriteria`] -- Alternate orderings and groupings for listing

pub mod book;
pub mod classification;
pub mod date;
pub mod error;
pub mod field;
pub mod id;
pub mod row;

pub use book::{Book, BookPatch};
pub use classification::{Classification, FICTION_GENRES};
pub use date::AddedDate;
pub use error::TypeError;
pub use field::{ListCriteria, SearchField};
pub use id::BookId;
pub use row::BookRow;
