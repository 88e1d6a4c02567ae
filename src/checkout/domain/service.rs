use async_trait::async_trait;
use chrono::NaiveDate;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::model::CheckoutEntity;
use crate::checkout::dto::{CheckoutDto, ReturnDto};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{LibraryStore, SharedStore};
use crate::utils::date::today;

pub(crate) struct CheckoutServiceImpl {
    branch_id: String,
    max_checkouts: usize,
    store: SharedStore,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(config: &Configuration, store: SharedStore) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            max_checkouts: config.max_checkouts,
            store,
        }
    }

    fn to_dto(store: &LibraryStore, checkout: &CheckoutEntity) -> LibraryResult<CheckoutDto> {
        let book = store.books.get_book(checkout.isbn.as_str())?;
        Ok(CheckoutDto::build(checkout, book))
    }

    // All checks run before the ledger is touched so a rejected checkout leaves no trace.
    fn ensure_can_checkout(&self, store: &LibraryStore, isbn: &str, customer_id: &str,
                           due_date: NaiveDate, today: NaiveDate) -> LibraryResult<()> {
        if due_date < today {
            return Err(LibraryError::validation(
                format!("due_date {} is before checkout date {}", due_date, today).as_str(), Some("400".to_string())));
        }
        let book = store.books.get_book(isbn)?;
        let customer = store.customers.get_customer(customer_id)?;
        if store.checkouts.contains_isbn_cust_id(isbn, customer_id) {
            return Err(LibraryError::conflict(
                format!("customer_id: {} already has ISBN: {} checked out", customer_id, isbn).as_str(), Some("409".to_string())));
        }
        if !book.has_available_copy() {
            return Err(LibraryError::conflict(
                format!("Not enough copies of book: {} ({} of {} available)",
                        isbn, book.available_copies, book.copies).as_str(), Some("409".to_string())));
        }
        if !customer.can_checkout(self.max_checkouts) {
            return Err(LibraryError::conflict(
                format!("Cannot check out more than {} books for customer: {}",
                        self.max_checkouts, customer_id).as_str(), Some("409".to_string())));
        }
        Ok(())
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn checkout(&self, isbn: &str, customer_id: &str, due_date: NaiveDate) -> LibraryResult<CheckoutDto> {
        let mut guard = self.store.lock().await;
        let store = &mut *guard;
        let today = today();
        self.ensure_can_checkout(store, isbn, customer_id, due_date, today)?;
        let checkout = store.checkouts.add_checkout(
            &mut store.books, &mut store.customers, isbn, customer_id, due_date, today)?;
        let dto = Self::to_dto(store, &checkout)?;
        tracing::info!(branch = %self.branch_id, checkout_id = %dto.checkout_id, isbn, customer_id,
            due_date = %dto.due_date, "checkout created");
        Ok(dto)
    }

    async fn returned(&self, isbn: &str, customer_id: &str) -> LibraryResult<ReturnDto> {
        let mut guard = self.store.lock().await;
        let store = &mut *guard;
        let receipt = store.checkouts.return_book(
            &mut store.books, &mut store.customers, isbn, customer_id, today())?;
        tracing::info!(branch = %self.branch_id, isbn, customer_id, "book returned");
        Ok(receipt)
    }

    async fn find_checkout_by_id(&self, checkout_id: &str) -> LibraryResult<CheckoutDto> {
        let store = self.store.lock().await;
        let checkout = store.checkouts.get_by_id(checkout_id)?;
        Self::to_dto(&store, checkout)
    }

    async fn find_checkouts_by_customer(&self, customer_id: &str) -> LibraryResult<Vec<CheckoutDto>> {
        let store = self.store.lock().await;
        let _ = store.customers.get_customer(customer_id)?;
        store.checkouts.get_by_customer_id(customer_id).into_iter()
            .map(|checkout| Self::to_dto(&store, checkout))
            .collect()
    }
}
