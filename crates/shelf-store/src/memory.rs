use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use shelf_types::BookRow;

use crate::error::{StoreError, StoreResult};
use crate::traits::RecordFile;

/// In-memory backing storage.
///
/// Intended for tests and embedding. Starts out "missing" (reads as `None`)
/// until the first write, mirroring a CSV file that does not exist yet. Can
/// be switched to read-only to make every write fail.
pub struct InMemoryRecordFile {
    rows: RwLock<Option<Vec<BookRow>>>,
    read_only: AtomicBool,
}

impl InMemoryRecordFile {
    /// Create storage with nothing written yet.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(None),
            read_only: AtomicBool::new(false),
        }
    }

    /// Create storage that already holds the given rows.
    pub fn with_rows(rows: Vec<BookRow>) -> Self {
        Self {
            rows: RwLock::new(Some(rows)),
            read_only: AtomicBool::new(false),
        }
    }

    /// Snapshot of the last written rows.
    pub fn rows(&self) -> Option<Vec<BookRow>> {
        self.rows.read().expect("lock poisoned").clone()
    }

    /// Make subsequent writes fail with [`StoreError::ReadOnly`].
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }
}

impl Default for InMemoryRecordFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFile for InMemoryRecordFile {
    fn read_rows(&self) -> StoreResult<Option<Vec<BookRow>>> {
        Ok(self.rows())
    }

    fn write_rows(&self, rows: &[BookRow]) -> StoreResult<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::ReadOnly);
        }
        *self.rows.write().expect("lock poisoned") = Some(rows.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

impl std::fmt::Debug for InMemoryRecordFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.rows().map(|rows| rows.len());
        f.debug_struct("InMemoryRecordFile")
            .field("rows", &count)
            .field("read_only", &self.read_only.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u32) -> BookRow {
        BookRow {
            book_id: id,
            title: format!("Book {id}"),
            author: "A".into(),
            genre: "G".into(),
            year: 2000,
            added_date: String::new(),
        }
    }

    #[test]
    fn starts_missing() {
        assert!(InMemoryRecordFile::new().read_rows().unwrap().is_none());
    }

    #[test]
    fn write_replaces_rows() {
        let file = InMemoryRecordFile::with_rows(vec![row(1), row(2)]);
        file.write_rows(&[row(3)]).unwrap();
        assert_eq!(file.read_rows().unwrap(), Some(vec![row(3)]));
    }

    #[test]
    fn read_only_rejects_writes() {
        let file = InMemoryRecordFile::with_rows(vec![row(1)]);
        file.set_read_only(true);
        assert!(matches!(file.write_rows(&[]), Err(StoreError::ReadOnly)));
        assert_eq!(file.rows(), Some(vec![row(1)]));

        file.set_read_only(false);
        file.write_rows(&[]).unwrap();
        assert_eq!(file.rows(), Some(vec![]));
    }
}
