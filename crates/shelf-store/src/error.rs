use std::path::PathBuf;

/// Errors from catalog store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be read or written as CSV.
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Storage backend is read-only or otherwise unavailable.
    #[error("store is read-only")]
    ReadOnly,

    /// Every identifier up to `u32::MAX` has been handed out.
    #[error("no book ids left to assign")]
    IdsExhausted,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
