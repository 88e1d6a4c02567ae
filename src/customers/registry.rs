use std::collections::HashMap;
use crate::core::library::{LibraryError, LibraryResult};
use crate::customers::domain::model::CustomerEntity;

// CustomerRegistry owns every customer record keyed by customer id.
#[derive(Debug, Default)]
pub(crate) struct CustomerRegistry {
    customers: HashMap<String, CustomerEntity>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a customer or updates name and email of an existing one.
    /// The open checkout counter survives re-registration.
    pub fn add_customer(&mut self, name: &str, email: &str, customer_id: &str) -> &CustomerEntity {
        self.customers.entry(customer_id.to_string())
            .and_modify(|customer| customer.update_info(name, email))
            .or_insert_with(|| CustomerEntity::new(name, email, customer_id))
    }

    pub fn get_customer(&self, customer_id: &str) -> LibraryResult<&CustomerEntity> {
        self.customers.get(customer_id).ok_or_else(|| Self::missing(customer_id))
    }

    pub(crate) fn get_customer_mut(&mut self, customer_id: &str) -> LibraryResult<&mut CustomerEntity> {
        self.customers.get_mut(customer_id).ok_or_else(|| Self::missing(customer_id))
    }

    pub fn contains_customer_id(&self, customer_id: &str) -> bool {
        self.customers.contains_key(customer_id)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn reset(&mut self) {
        self.customers.clear();
    }

    fn missing(customer_id: &str) -> LibraryError {
        LibraryError::not_found(format!("customer_id: {} not found in customers!", customer_id).as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::customers::registry::CustomerRegistry;

    #[tokio::test]
    async fn test_should_add_customer() {
        let mut registry = CustomerRegistry::new();
        let customer = registry.add_customer("Ada", "ada@lib.org", "C1");
        assert_eq!("Ada", customer.name.as_str());
        assert_eq!(0, customer.checkouts);
        assert!(registry.contains_customer_id("C1"));
        assert!(!registry.contains_customer_id("C2"));
    }

    #[tokio::test]
    async fn test_should_update_info_and_keep_checkouts() {
        let mut registry = CustomerRegistry::new();
        let _ = registry.add_customer("Ada", "ada@lib.org", "C1");
        registry.get_customer_mut("C1").expect("should find customer").checkout_book();
        let customer = registry.add_customer("Ada L.", "ada@math.org", "C1");
        assert_eq!("Ada L.", customer.name.as_str());
        assert_eq!("ada@math.org", customer.email.as_str());
        assert_eq!(1, customer.checkouts);
        assert_eq!(1, registry.len());
    }

    #[tokio::test]
    async fn test_should_fail_unknown_customer() {
        let registry = CustomerRegistry::new();
        assert!(matches!(registry.get_customer("nobody"), Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_reset() {
        let mut registry = CustomerRegistry::new();
        let _ = registry.add_customer("Ada", "ada@lib.org", "C1");
        registry.reset();
        assert!(registry.is_empty());
    }
}
