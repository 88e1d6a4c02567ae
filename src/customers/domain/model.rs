use serde::{Deserialize, Serialize};

// CustomerEntity abstracts a registered library customer.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct CustomerEntity {
    pub name: String,
    pub email: String,
    pub customer_id: String,
    // number of open checkouts held by the customer
    pub checkouts: usize,
}

impl CustomerEntity {
    pub fn new(name: &str, email: &str, customer_id: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            customer_id: customer_id.to_string(),
            checkouts: 0,
        }
    }

    pub(crate) fn update_info(&mut self, name: &str, email: &str) {
        self.name = name.to_string();
        self.email = email.to_string();
    }

    pub fn can_checkout(&self, max_checkouts: usize) -> bool {
        self.checkouts < max_checkouts
    }

    pub(crate) fn checkout_book(&mut self) {
        self.checkouts += 1;
    }

    pub(crate) fn return_book(&mut self) {
        self.checkouts = self.checkouts.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use crate::customers::domain::model::CustomerEntity;

    #[tokio::test]
    async fn test_should_build_customer() {
        let customer = CustomerEntity::new("Ada", "ada@lib.org", "C1");
        assert_eq!("C1", customer.customer_id.as_str());
        assert_eq!(0, customer.checkouts);
        assert!(customer.can_checkout(5));
    }

    #[tokio::test]
    async fn test_should_count_checkouts() {
        let mut customer = CustomerEntity::new("Ada", "ada@lib.org", "C1");
        for _ in 0..5 {
            customer.checkout_book();
        }
        assert!(!customer.can_checkout(5));
        customer.return_book();
        assert!(customer.can_checkout(5));
        assert_eq!(4, customer.checkouts);
    }
}
