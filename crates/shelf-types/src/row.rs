use serde::{Deserialize, Serialize};

/// One row of the backing file.
///
/// Field order matches the on-disk header. `added_date` may be missing from
/// older files, in which case it reads as empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRow {
    pub book_id: u32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i32,
    #[serde(default)]
    pub added_date: String,
}

impl BookRow {
    /// Column names, in the order they are written.
    pub const HEADER: [&'static str; 6] =
        ["book_id", "title", "author", "genre", "year", "added_date"];
}
