//! Typed names for the searchable fields and the listing criteria.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::book::Book;
use crate::error::TypeError;

/// A text field that a catalog search can match against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [Self::Title, Self::Author, Self::Genre];

    /// Read this field from a book.
    pub fn value(self, book: &Book) -> &str {
        match self {
            Self::Title => book.title(),
            Self::Author => book.author(),
            Self::Genre => book.genre(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "genre" => Ok(Self::Genre),
            _ => Err(TypeError::UnknownField(s.to_string())),
        }
    }
}

/// Alternate views of the whole catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListCriteria {
    /// Most recently added first.
    Recent,
    /// Grouped by exact genre string.
    Genre,
}

impl fmt::Display for ListCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recent => write!(f, "recent"),
            Self::Genre => write!(f, "genre"),
        }
    }
}

impl FromStr for ListCriteria {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recent" => Ok(Self::Recent),
            "genre" => Ok(Self::Genre),
            _ => Err(TypeError::UnknownCriteria(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AddedDate, BookId};

    fn dune() -> Book {
        Book::new(
            BookId::new(1),
            "Dune",
            "Frank Herbert",
            "Fantasy",
            1965,
            Some(AddedDate::new("2024-01-01")),
        )
    }

    #[test]
    fn accessors_read_the_matching_field() {
        let book = dune();
        assert_eq!(SearchField::Title.value(&book), "Dune");
        assert_eq!(SearchField::Author.value(&book), "Frank Herbert");
        assert_eq!(SearchField::Genre.value(&book), "Fantasy");
    }

    #[test]
    fn parse_known_fields() {
        assert_eq!("title".parse::<SearchField>(), Ok(SearchField::Title));
        assert_eq!(" Author ".parse::<SearchField>(), Ok(SearchField::Author));
        assert_eq!("GENRE".parse::<SearchField>(), Ok(SearchField::Genre));
    }

    #[test]
    fn parse_unknown_field_is_an_error() {
        assert_eq!(
            "year".parse::<SearchField>(),
            Err(TypeError::UnknownField("year".into()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for field in SearchField::ALL {
            assert_eq!(field.to_string().parse::<SearchField>(), Ok(field));
        }
    }

    #[test]
    fn parse_criteria() {
        assert_eq!("recent".parse::<ListCriteria>(), Ok(ListCriteria::Recent));
        assert_eq!("Genre".parse::<ListCriteria>(), Ok(ListCriteria::Genre));
        assert!("oldest".parse::<ListCriteria>().is_err());
    }
}
