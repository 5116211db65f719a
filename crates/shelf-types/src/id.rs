use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Store-assigned identifier for a book.
///
/// Identifiers are unique within one catalog and never change once assigned.
/// The store hands them out in strictly increasing order starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u32);

impl BookId {
    /// The first identifier handed out by an empty catalog.
    pub const FIRST: BookId = BookId(1);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The identifier immediately after this one, or `None` past `u32::MAX`.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BookId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<BookId> for u32 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl FromStr for BookId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| TypeError::InvalidId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" 42 ".parse::<BookId>().unwrap(), BookId::new(42));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            "forty-two".parse::<BookId>(),
            Err(TypeError::InvalidId("forty-two".into()))
        );
        assert!("-1".parse::<BookId>().is_err());
        assert!("".parse::<BookId>().is_err());
    }

    #[test]
    fn next_is_strictly_greater() {
        let id = BookId::FIRST;
        assert!(id.next().unwrap() > id);
        assert_eq!(id.next().unwrap().get(), 2);
    }

    #[test]
    fn next_stops_at_the_last_id() {
        assert_eq!(BookId::new(u32::MAX - 1).next(), Some(BookId::new(u32::MAX)));
        assert_eq!(BookId::new(u32::MAX).next(), None);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&BookId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
