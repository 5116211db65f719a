use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use shelf_types::BookRow;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::RecordFile;

/// A catalog persisted as a UTF-8 CSV file.
///
/// On-disk format:
/// ```text
/// book_id,title,author,genre,year,added_date
/// 1,Dune,Frank Herbert,Fantasy,1965,2024-01-01
/// 2,"Guns, Germs, and Steel",Jared Diamond,History,1997,2024-01-02
/// ```
///
/// The header is always written, even for an empty catalog. Fields that
/// contain the delimiter, quotes or newlines are quoted by the `csv` writer.
/// Rows without an `added_date` cell are read with an empty date.
#[derive(Clone, Debug)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn csv_error(&self, source: csv::Error) -> StoreError {
        StoreError::Csv {
            path: self.path.clone(),
            source,
        }
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordFile for CsvFile {
    fn read_rows(&self) -> StoreResult<Option<Vec<BookRow>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let rows = reader
            .deserialize::<BookRow>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| self.csv_error(e))?;

        debug!(path = %self.path.display(), rows = rows.len(), "read catalog file");
        Ok(Some(rows))
    }

    fn write_rows(&self, rows: &[BookRow]) -> StoreResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| self.csv_error(e))?;

        writer
            .write_record(BookRow::HEADER)
            .map_err(|e| self.csv_error(e))?;
        for row in rows {
            writer.serialize(row).map_err(|e| self.csv_error(e))?;
        }
        writer.flush().map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), rows = rows.len(), "wrote catalog file");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
