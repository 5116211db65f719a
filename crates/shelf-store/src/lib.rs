//! Catalog storage for Shelf.
//!
//! The [`Catalog`] owns every [`Book`](shelf_types::Book) in a library,
//! hands out identifiers, and mirrors the whole collection to a backing file
//! after every mutation (write-through, no batching).
//!
//! # Storage Backends
//!
//! All backends implement the [`RecordFile`] trait:
//!
//! - [`CsvFile`] -- a CSV file on disk with a fixed header row
//! - [`InMemoryRecordFile`] -- `Vec`-backed rows for tests and embedding
//!
//! # Design Rules
//!
//! 1. Every mutation rewrites the entire file; there are no incremental diffs.
//! 2. A missing backing file at startup means an empty catalog, not an error.
//! 3. Save failures are returned to the caller. The in-memory state is kept.
//! 4. Unknown identifiers are reported as `Ok(None)`, never as errors.

pub mod catalog;
pub mod csv_file;
pub mod error;
pub mod listing;
pub mod memory;
pub mod traits;

pub use catalog::{Catalog, LoadStatus};
pub use csv_file::CsvFile;
pub use error::{StoreError, StoreResult};
pub use listing::{GenreGroup, Listing};
pub use memory::InMemoryRecordFile;
pub use traits::RecordFile;
