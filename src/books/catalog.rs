use std::collections::hash_map::Entry;
use std::collections::HashMap;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};

// BookCatalog owns every book record keyed by isbn.
#[derive(Debug, Default)]
pub(crate) struct BookCatalog {
    books: HashMap<String, BookEntity>,
}

impl BookCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new title or, when the isbn is already known, more copies of it.
    /// Title and author of an existing record are kept as they are.
    /// Fails without touching the record when the copy count would overflow.
    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str, copies: i64) -> LibraryResult<&BookEntity> {
        match self.books.entry(isbn.to_string()) {
            Entry::Occupied(entry) => {
                let book = entry.into_mut();
                book.add_copies(copies)?;
                Ok(&*book)
            }
            Entry::Vacant(entry) => Ok(&*entry.insert(BookEntity::new(title, author, isbn, copies))),
        }
    }

    pub fn get_book(&self, isbn: &str) -> LibraryResult<&BookEntity> {
        self.books.get(isbn).ok_or_else(|| Self::missing(isbn))
    }

    pub(crate) fn get_book_mut(&mut self, isbn: &str) -> LibraryResult<&mut BookEntity> {
        self.books.get_mut(isbn).ok_or_else(|| Self::missing(isbn))
    }

    pub fn contains_isbn(&self, isbn: &str) -> bool {
        self.books.contains_key(isbn)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn reset(&mut self) {
        self.books.clear();
    }

    fn missing(isbn: &str) -> LibraryError {
        LibraryError::not_found(format!("ISBN: {} not found in library!", isbn).as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::catalog::BookCatalog;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_add_book() {
        let mut catalog = BookCatalog::new();
        let book = catalog.add_book("Dune", "Herbert", "111", 2).expect("should add book");
        assert_eq!(2, book.copies);
        assert_eq!(2, book.available_copies);
        assert!(catalog.contains_isbn("111"));
        assert!(!catalog.contains_isbn("222"));
    }

    #[tokio::test]
    async fn test_should_grow_existing_book() {
        let mut catalog = BookCatalog::new();
        let _ = catalog.add_book("Dune", "Herbert", "111", 5);
        let book = catalog.add_book("Dune Messiah", "Someone", "111", 3).expect("should add copies");
        assert_eq!(8, book.copies);
        assert_eq!(8, book.available_copies);
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Herbert", book.author.as_str());
        assert_eq!(1, catalog.len());
    }

    #[tokio::test]
    async fn test_should_keep_checked_out_copies_when_growing() {
        let mut catalog = BookCatalog::new();
        let _ = catalog.add_book("Dune", "Herbert", "111", 2);
        catalog.get_book_mut("111").expect("should find book").checkout_copy();
        let book = catalog.add_book("Dune", "Herbert", "111", 0).expect("should add no copies");
        assert_eq!(2, book.copies);
        assert_eq!(1, book.available_copies);
    }

    #[tokio::test]
    async fn test_should_reject_copy_overflow() {
        let mut catalog = BookCatalog::new();
        let _ = catalog.add_book("Dune", "Herbert", "111", i64::MAX).expect("should add book");
        let res = catalog.add_book("Dune", "Herbert", "111", 1);
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        let book = catalog.get_book("111").expect("should find book");
        assert_eq!(i64::MAX, book.copies);
        assert_eq!(i64::MAX, book.available_copies);
    }

    #[tokio::test]
    async fn test_should_fail_unknown_isbn() {
        let catalog = BookCatalog::new();
        assert!(matches!(catalog.get_book("404"), Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_reset() {
        let mut catalog = BookCatalog::new();
        let _ = catalog.add_book("Dune", "Herbert", "111", 2);
        catalog.reset();
        assert!(catalog.is_empty());
        assert!(catalog.get_book("111").is_err());
    }
}
