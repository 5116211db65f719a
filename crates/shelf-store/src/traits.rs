use shelf_types::BookRow;

use crate::error::StoreResult;

/// Backing storage for a catalog: a whole-collection read and write.
///
/// All implementations must satisfy these invariants:
/// - `write_rows` replaces the entire previous contents.
/// - `read_rows` returns rows in the order they were last written.
/// - A backing file that does not exist yet reads as `Ok(None)`.
/// - All I/O errors are propagated, never silently ignored.
pub trait RecordFile: Send + Sync {
    /// Read every row. Returns `Ok(None)` if nothing has been written yet.
    fn read_rows(&self) -> StoreResult<Option<Vec<BookRow>>>;

    /// Overwrite the backing storage with exactly these rows.
    fn write_rows(&self, rows: &[BookRow]) -> StoreResult<()>;

    /// Human-readable description of where the rows live.
    fn location(&self) -> String;
}
