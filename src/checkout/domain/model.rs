use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::utils::date::serializer;

// CheckoutEntity abstracts an open loan of one copy of a book to a customer.
// It only keeps the keys of the book and customer it refers to.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct CheckoutEntity {
    pub checkout_id: String,
    pub isbn: String,
    pub customer_id: String,
    #[serde(with = "serializer")]
    pub checkout_date: NaiveDate,
    #[serde(with = "serializer")]
    pub due_date: NaiveDate,
}

impl CheckoutEntity {
    pub fn new(sequence: u64, isbn: &str, customer_id: &str, checkout_date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            checkout_id: format!("CKO{}", sequence),
            isbn: isbn.to_string(),
            customer_id: customer_id.to_string(),
            checkout_date,
            due_date,
        }
    }
}
