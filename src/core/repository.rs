use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use crate::books::catalog::BookCatalog;
use crate::checkout::ledger::CheckoutLedger;
use crate::customers::registry::CustomerRegistry;

// LibraryStore is the whole in-memory state of the library. Checkouts read a book
// and a customer and then write both plus the ledger, so the three collections are
// guarded together by one lock rather than one lock each.
#[derive(Debug)]
pub(crate) struct LibraryStore {
    pub books: BookCatalog,
    pub customers: CustomerRegistry,
    pub checkouts: CheckoutLedger,
}

impl LibraryStore {
    pub fn new() -> Self {
        Self {
            books: BookCatalog::new(),
            customers: CustomerRegistry::new(),
            checkouts: CheckoutLedger::new(),
        }
    }

    pub fn reset(&mut self) {
        self.books.reset();
        self.customers.reset();
        self.checkouts.reset();
    }
}

impl Default for LibraryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<LibraryStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, LibraryStore> {
        self.inner.lock().await
    }
}
