use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::SharedStore;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    store: SharedStore,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, store: SharedStore) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            store,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, title: &str, author: &str, isbn: &str, copies: i64) -> LibraryResult<BookDto> {
        let mut store = self.store.lock().await;
        let existing = store.books.contains_isbn(isbn);
        let book = BookDto::from(store.books.add_book(title, author, isbn, copies)?);
        if existing {
            tracing::info!(branch = %self.branch_id, isbn, added = copies, copies = book.copies,
                available_copies = book.available_copies, "copies added");
        } else {
            tracing::info!(branch = %self.branch_id, isbn, copies = book.copies, "book added");
        }
        Ok(book)
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        let store = self.store.lock().await;
        store.books.get_book(isbn).map(BookDto::from)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::core::repository::SharedStore;

    fn build_service() -> Box<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test"), &SharedStore::new())
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = build_service();

        let book = catalog_svc.add_book("Dune", "Herbert", "111", 2).await.expect("should add book");
        assert_eq!(2, book.available_copies);

        let loaded = catalog_svc.find_book_by_isbn("111").await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_add_more_copies() {
        let catalog_svc = build_service();

        let _ = catalog_svc.add_book("Dune", "Herbert", "111", 5).await.expect("should add book");
        let book = catalog_svc.add_book("Dune", "Herbert", "111", 3).await.expect("should add copies");
        assert_eq!(8, book.copies);
        assert_eq!(8, book.available_copies);
    }

    #[tokio::test]
    async fn test_should_not_find_unknown_book() {
        let catalog_svc = build_service();

        let loaded = catalog_svc.find_book_by_isbn("404").await;
        assert!(matches!(loaded, Err(LibraryError::NotFound { .. })));
    }
}
