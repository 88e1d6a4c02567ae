use std::collections::HashMap;
use chrono::NaiveDate;
use crate::books::catalog::BookCatalog;
use crate::checkout::domain::model::CheckoutEntity;
use crate::checkout::dto::ReturnDto;
use crate::core::library::{LibraryError, LibraryResult};
use crate::customers::registry::CustomerRegistry;

/// CheckoutLedger owns the open checkouts and keeps three views over them:
/// by checkout id, by customer id (in checkout order) and by (isbn, customer id).
///
/// It is the only writer of `BookEntity::available_copies` and
/// `CustomerEntity::checkouts`. Both counters move together with the indices so
/// that for every book `available_copies = copies - open checkouts of the isbn`
/// and for every customer `checkouts = open checkouts of the customer`.
/// Books and customers are looked up through the catalog and registry at
/// mutation time; the ledger never holds on to them.
#[derive(Debug)]
pub(crate) struct CheckoutLedger {
    next_sequence: u64,
    by_id: HashMap<String, CheckoutEntity>,
    by_customer_id: HashMap<String, Vec<String>>,
    by_isbn_customer_id: HashMap<(String, String), String>,
}

impl Default for CheckoutLedger {
    fn default() -> Self {
        Self {
            next_sequence: 1,
            by_id: HashMap::new(),
            by_customer_id: HashMap::new(),
            by_isbn_customer_id: HashMap::new(),
        }
    }
}

impl CheckoutLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a checkout of `isbn` for `customer_id`.
    ///
    /// Copy availability and the customer limit are checked by the caller while
    /// it holds the store lock. This only refuses to open a second checkout for
    /// the same pair or one referring to an unknown book or customer, and it does
    /// so before touching any state.
    pub fn add_checkout(&mut self, books: &mut BookCatalog, customers: &mut CustomerRegistry,
                        isbn: &str, customer_id: &str,
                        due_date: NaiveDate, today: NaiveDate) -> LibraryResult<CheckoutEntity> {
        if self.contains_isbn_cust_id(isbn, customer_id) {
            return Err(LibraryError::conflict(format!(
                "customer_id: {} already has ISBN: {} checked out", customer_id, isbn).as_str(), Some("409".to_string())));
        }
        let book = books.get_book_mut(isbn)?;
        let customer = customers.get_customer_mut(customer_id)?;

        let checkout = CheckoutEntity::new(self.next_sequence, isbn, customer_id, today, due_date);
        self.next_sequence += 1;

        book.checkout_copy();
        customer.checkout_book();

        self.by_customer_id.entry(customer_id.to_string())
            .or_default()
            .push(checkout.checkout_id.to_string());
        self.by_isbn_customer_id.insert(
            (isbn.to_string(), customer_id.to_string()), checkout.checkout_id.to_string());
        self.by_id.insert(checkout.checkout_id.to_string(), checkout.clone());
        Ok(checkout)
    }

    pub fn get_by_id(&self, checkout_id: &str) -> LibraryResult<&CheckoutEntity> {
        self.by_id.get(checkout_id).ok_or_else(|| LibraryError::not_found(
            format!("checkout_id: {} not found in checkouts!", checkout_id).as_str()))
    }

    /// Open checkouts of a customer in the order they were made; empty when there are none.
    pub fn get_by_customer_id(&self, customer_id: &str) -> Vec<&CheckoutEntity> {
        self.by_customer_id.get(customer_id)
            .map(|ids| ids.iter().filter_map(|id| self.by_id.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn contains_isbn_cust_id(&self, isbn: &str, customer_id: &str) -> bool {
        self.by_isbn_customer_id.contains_key(&(isbn.to_string(), customer_id.to_string()))
    }

    /// Closes the open checkout of `isbn` held by `customer_id`.
    /// Fails with a conflict when the pair has no open checkout.
    pub fn return_book(&mut self, books: &mut BookCatalog, customers: &mut CustomerRegistry,
                       isbn: &str, customer_id: &str, today: NaiveDate) -> LibraryResult<ReturnDto> {
        let key = (isbn.to_string(), customer_id.to_string());
        let checkout_id = self.by_isbn_customer_id.get(&key).cloned().ok_or_else(|| LibraryError::conflict(
            format!("Checkout with ISBN: {} and customer_id: {} doesn't exist!", isbn, customer_id).as_str(),
            Some("409".to_string())))?;
        if !self.by_id.contains_key(&checkout_id) {
            return Err(LibraryError::runtime(
                format!("checkout index out of sync for {}", checkout_id).as_str(), None));
        }
        let book = books.get_book_mut(isbn)?;
        let customer = customers.get_customer_mut(customer_id)?;

        book.return_copy();
        customer.return_book();

        self.by_isbn_customer_id.remove(&key);
        self.by_id.remove(&checkout_id);
        if let Some(ids) = self.by_customer_id.get_mut(customer_id) {
            ids.retain(|id| *id != checkout_id);
            if ids.is_empty() {
                self.by_customer_id.remove(customer_id);
            }
        }
        Ok(ReturnDto::new(isbn, customer_id, today))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Drops every open checkout and restarts the id sequence at CKO1.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use crate::books::catalog::BookCatalog;
    use crate::checkout::ledger::CheckoutLedger;
    use crate::core::library::LibraryError;
    use crate::customers::registry::CustomerRegistry;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
    }

    fn setup() -> (BookCatalog, CustomerRegistry, CheckoutLedger) {
        let mut books = BookCatalog::new();
        let _ = books.add_book("Dune", "Herbert", "111", 2);
        let _ = books.add_book("Emma", "Austen", "222", 1);
        let mut customers = CustomerRegistry::new();
        let _ = customers.add_customer("Ada", "ada@lib.org", "C1");
        let _ = customers.add_customer("Bob", "bob@lib.org", "C2");
        (books, customers, CheckoutLedger::new())
    }

    #[tokio::test]
    async fn test_should_add_checkout() {
        let (mut books, mut customers, mut ledger) = setup();
        let due = today() + Duration::days(7);
        let checkout = ledger.add_checkout(&mut books, &mut customers, "111", "C1", due, today())
            .expect("should checkout");
        assert_eq!("CKO1", checkout.checkout_id.as_str());
        assert_eq!(today(), checkout.checkout_date);
        assert_eq!(due, checkout.due_date);
        assert_eq!(1, books.get_book("111").expect("book").available_copies);
        assert_eq!(1, customers.get_customer("C1").expect("customer").checkouts);
        assert!(ledger.contains_isbn_cust_id("111", "C1"));
        assert_eq!(checkout, *ledger.get_by_id("CKO1").expect("should find checkout"));
    }

    #[tokio::test]
    async fn test_should_list_by_customer_in_order() {
        let (mut books, mut customers, mut ledger) = setup();
        let _ = ledger.add_checkout(&mut books, &mut customers, "222", "C1", today(), today()).expect("should checkout");
        let _ = ledger.add_checkout(&mut books, &mut customers, "111", "C2", today(), today()).expect("should checkout");
        let _ = ledger.add_checkout(&mut books, &mut customers, "111", "C1", today(), today()).expect("should checkout");
        let ids: Vec<String> = ledger.get_by_customer_id("C1").iter().map(|c| c.checkout_id.to_string()).collect();
        assert_eq!(vec!["CKO1".to_string(), "CKO3".to_string()], ids);
        assert!(ledger.get_by_customer_id("C9").is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_pair() {
        let (mut books, mut customers, mut ledger) = setup();
        let _ = ledger.add_checkout(&mut books, &mut customers, "111", "C1", today(), today()).expect("should checkout");
        let res = ledger.add_checkout(&mut books, &mut customers, "111", "C1", today(), today());
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
        assert_eq!(1, books.get_book("111").expect("book").available_copies);
        assert_eq!(1, customers.get_customer("C1").expect("customer").checkouts);
        assert_eq!(1, ledger.len());
    }

    #[tokio::test]
    async fn test_should_not_mutate_on_unknown_customer() {
        let (mut books, mut customers, mut ledger) = setup();
        let res = ledger.add_checkout(&mut books, &mut customers, "111", "C9", today(), today());
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        assert_eq!(2, books.get_book("111").expect("book").available_copies);
        assert!(ledger.is_empty());
    }

    #[tokio::test]
    async fn test_should_return_book() {
        let (mut books, mut customers, mut ledger) = setup();
        let checkout = ledger.add_checkout(&mut books, &mut customers, "111", "C1", today(), today())
            .expect("should checkout");
        let returned_on = today() + Duration::days(3);
        let receipt = ledger.return_book(&mut books, &mut customers, "111", "C1", returned_on)
            .expect("should return");
        assert_eq!("Book returned successfully", receipt.message.as_str());
        assert_eq!("111", receipt.isbn.as_str());
        assert_eq!("C1", receipt.customer_id.as_str());
        assert_eq!(returned_on, receipt.return_date);
        assert_eq!(2, books.get_book("111").expect("book").available_copies);
        assert_eq!(0, customers.get_customer("C1").expect("customer").checkouts);
        assert!(!ledger.contains_isbn_cust_id("111", "C1"));
        assert!(ledger.get_by_id(checkout.checkout_id.as_str()).is_err());
        assert!(ledger.get_by_customer_id("C1").is_empty());
    }

    #[tokio::test]
    async fn test_should_fail_return_without_checkout() {
        let (mut books, mut customers, mut ledger) = setup();
        let res = ledger.return_book(&mut books, &mut customers, "111", "C1", today());
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
        assert_eq!(2, books.get_book("111").expect("book").available_copies);
        assert_eq!(0, customers.get_customer("C1").expect("customer").checkouts);
    }

    #[tokio::test]
    async fn test_should_never_reuse_ids_before_reset() {
        let (mut books, mut customers, mut ledger) = setup();
        let _ = ledger.add_checkout(&mut books, &mut customers, "111", "C1", today(), today()).expect("should checkout");
        let _ = ledger.return_book(&mut books, &mut customers, "111", "C1", today()).expect("should return");
        let again = ledger.add_checkout(&mut books, &mut customers, "111", "C1", today(), today()).expect("should checkout");
        assert_eq!("CKO2", again.checkout_id.as_str());
    }

    #[tokio::test]
    async fn test_should_reset_indices_and_sequence() {
        let (mut books, mut customers, mut ledger) = setup();
        let _ = ledger.add_checkout(&mut books, &mut customers, "111", "C1", today(), today()).expect("should checkout");
        ledger.reset();
        assert!(ledger.is_empty());
        assert!(!ledger.contains_isbn_cust_id("111", "C1"));
        assert!(ledger.get_by_customer_id("C1").is_empty());
        let (mut books, mut customers, _) = setup();
        let checkout = ledger.add_checkout(&mut books, &mut customers, "111", "C1", today(), today()).expect("should checkout");
        assert_eq!("CKO1", checkout.checkout_id.as_str());
    }
}
