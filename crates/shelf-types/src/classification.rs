use std::fmt;

use serde::{Deserialize, Serialize};

/// Genres that mark a book as fiction. Matching is exact after lower-casing.
pub const FICTION_GENRES: [&str; 4] = ["fiction", "novel", "fantasy", "mystery"];

/// Fiction / non-fiction flag derived from a book's genre.
///
/// The flag is computed once when a book is built and stored as data. It is
/// not recomputed when the genre is later edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Fiction,
    NonFiction,
}

impl Classification {
    /// Classify a genre name. This is the only classification policy; every
    /// path that builds a [`Book`](crate::Book) goes through it.
    pub fn from_genre(genre: &str) -> Self {
        let lowered = genre.to_lowercase();
        if FICTION_GENRES.contains(&lowered.as_str()) {
            Self::Fiction
        } else {
            Self::NonFiction
        }
    }

    pub fn is_fiction(self) -> bool {
        matches!(self, Self::Fiction)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fiction => write!(f, "Fiction"),
            Self::NonFiction => write!(f, "Non-fiction"),
        }
    }
}
