use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid book id: {0:?}")]
    InvalidId(String),

    #[error("unknown search field: {0:?} (expected title, author or genre)")]
    UnknownField(String),

    #[error("unknown list criteria: {0:?} (expected recent or genre)")]
    UnknownCriteria(String),
}
