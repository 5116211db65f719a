//! Views over the catalog returned by [`Catalog::list`](crate::Catalog::list).

use serde::Serialize;
use shelf_types::Book;

/// Books that share one exact genre string, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenreGroup<'a> {
    pub genre: &'a str,
    pub books: Vec<&'a Book>,
}

/// Result of listing the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Listing<'a> {
    /// A flat sequence of books.
    Books(Vec<&'a Book>),
    /// Books grouped by genre, groups in first-seen order.
    ByGenre(Vec<GenreGroup<'a>>),
}

impl<'a> Listing<'a> {
    /// Total number of books across the listing.
    pub fn len(&self) -> usize {
        match self {
            Self::Books(books) => books.len(),
            Self::ByGenre(groups) => groups.iter().map(|g| g.books.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The flat sequence, if this is a flat listing.
    pub fn as_books(&self) -> Option<&[&'a Book]> {
        match self {
            Self::Books(books) => Some(books.as_slice()),
            Self::ByGenre(_) => None,
        }
    }

    /// The genre groups, if this is a grouped listing.
    pub fn as_groups(&self) -> Option<&[GenreGroup<'a>]> {
        match self {
            Self::Books(_) => None,
            Self::ByGenre(groups) => Some(groups.as_slice()),
        }
    }
}

/// Sort by added date, newest first. Ties keep catalog order.
pub(crate) fn newest_first<'a>(books: impl Iterator<Item = &'a Book>) -> Vec<&'a Book> {
    let mut books: Vec<&Book> = books.collect();
    books.sort_by(|a, b| b.added_date().cmp(a.added_date()));
    books
}

/// Group by exact genre string, groups ordered by first appearance.
pub(crate) fn group_by_genre<'a>(books: impl Iterator<Item = &'a Book>) -> Vec<GenreGroup<'a>> {
    let mut groups: Vec<GenreGroup<'a>> = Vec::new();
    for book in books {
        match groups.iter_mut().find(|g| g.genre == book.genre()) {
            Some(group) => group.books.push(book),
            None => groups.push(GenreGroup {
                genre: book.genre(),
                books: vec![book],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_types::{AddedDate, BookId};

    fn book(id: u32, genre: &str, date: &str) -> Book {
        Book::new(
            BookId::new(id),
            format!("Book {id}"),
            "Author",
            genre,
            2000,
            Some(AddedDate::new(date)),
        )
    }

    #[test]
    fn newest_first_is_descending_and_stable() {
        let books = [
            book(1, "A", "2023-01-01"),
            book(2, "A", "2024-06-01"),
            book(3, "A", "2023-01-01"),
            book(4, "A", ""),
        ];
        let ids: Vec<u32> = newest_first(books.iter())
            .iter()
            .map(|b| b.id().get())
            .collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn groups_keep_first_seen_order_and_exact_keys() {
        let books = [
            book(1, "Mystery", ""),
            book(2, "History", ""),
            book(3, "mystery", ""),
            book(4, "Mystery", ""),
        ];
        let groups = group_by_genre(books.iter());
        let keys: Vec<&str> = groups.iter().map(|g| g.genre).collect();
        assert_eq!(keys, vec!["Mystery", "History", "mystery"]);
        assert_eq!(groups[0].books.len(), 2);
        assert_eq!(groups[0].books[1].id().get(), 4);
    }

    #[test]
    fn listing_len_counts_grouped_books() {
        let books = [book(1, "X", ""), book(2, "Y", ""), book(3, "X", "")];
        let listing = Listing::ByGenre(group_by_genre(books.iter()));
        assert_eq!(listing.len(), 3);
        assert!(listing.as_books().is_none());
        assert_eq!(listing.as_groups().unwrap().len(), 2);
    }
}
