use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// BookEntity abstracts a title in the library inventory; all physical copies
// of the same isbn share one record and are tracked through counters.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub copies: i64,
    pub available_copies: i64,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, copies: i64) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            copies,
            available_copies: copies,
        }
    }

    pub fn has_available_copy(&self) -> bool {
        self.available_copies >= 1
    }

    // Both counters are updated only when neither sum overflows.
    pub(crate) fn add_copies(&mut self, copies: i64) -> LibraryResult<()> {
        let total = self.copies.checked_add(copies);
        let available = self.available_copies.checked_add(copies);
        match (total, available) {
            (Some(total), Some(available)) => {
                self.copies = total;
                self.available_copies = available;
                Ok(())
            }
            _ => Err(LibraryError::validation(
                format!("Adding {} copies to ISBN: {} exceeds the supported number of copies ({} held)",
                        copies, self.isbn, self.copies).as_str(), Some("400".to_string()))),
        }
    }

    pub(crate) fn checkout_copy(&mut self) {
        self.available_copies -= 1;
    }

    pub(crate) fn return_copy(&mut self) {
        self.available_copies += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("Dune", "Herbert", "111", 2);
        assert_eq!("111", book.isbn.as_str());
        assert_eq!("Dune", book.title.as_str());
        assert_eq!(2, book.copies);
        assert_eq!(2, book.available_copies);
        assert!(book.has_available_copy());
    }

    #[tokio::test]
    async fn test_should_track_copies() {
        let mut book = BookEntity::new("Dune", "Herbert", "111", 1);
        book.checkout_copy();
        assert!(!book.has_available_copy());
        book.add_copies(3).expect("should add copies");
        assert_eq!(4, book.copies);
        assert_eq!(3, book.available_copies);
        book.return_copy();
        assert_eq!(4, book.available_copies);
    }

    #[tokio::test]
    async fn test_should_refuse_overflowing_copies() {
        let mut book = BookEntity::new("Dune", "Herbert", "111", i64::MAX);
        let res = book.add_copies(1);
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert_eq!(i64::MAX, book.copies);
        assert_eq!(i64::MAX, book.available_copies);
    }
}
