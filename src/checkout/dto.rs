use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::checkout::domain::model::CheckoutEntity;
use crate::utils::date::serializer;

pub(crate) const RETURN_MESSAGE: &str = "Book returned successfully";

// CheckoutDto abstracts the book that is checked out, including the title of the book.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct CheckoutDto {
    pub checkout_id: String,
    pub isbn: String,
    pub title: String,
    pub customer_id: String,
    #[serde(with = "serializer")]
    pub checkout_date: NaiveDate,
    #[serde(with = "serializer")]
    pub due_date: NaiveDate,
}

impl CheckoutDto {
    pub fn build(checkout: &CheckoutEntity, book: &BookEntity) -> Self {
        Self {
            checkout_id: checkout.checkout_id.to_string(),
            isbn: checkout.isbn.to_string(),
            title: book.title.to_string(),
            customer_id: checkout.customer_id.to_string(),
            checkout_date: checkout.checkout_date,
            due_date: checkout.due_date,
        }
    }
}

// ReturnDto is the receipt handed back once a checkout is closed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct ReturnDto {
    pub message: String,
    pub isbn: String,
    pub customer_id: String,
    #[serde(with = "serializer")]
    pub return_date: NaiveDate,
}

impl ReturnDto {
    pub fn new(isbn: &str, customer_id: &str, return_date: NaiveDate) -> Self {
        Self {
            message: RETURN_MESSAGE.to_string(),
            isbn: isbn.to_string(),
            customer_id: customer_id.to_string(),
            return_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use crate::books::domain::model::BookEntity;
    use crate::checkout::domain::model::CheckoutEntity;
    use crate::checkout::dto::{CheckoutDto, ReturnDto};

    #[tokio::test]
    async fn test_should_serialize_checkout() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        let due = NaiveDate::from_ymd_opt(2024, 5, 15).expect("valid date");
        let book = BookEntity::new("Dune", "Herbert", "111", 2);
        let checkout = CheckoutDto::build(&CheckoutEntity::new(1, "111", "C1", today, due), &book);
        assert_eq!(json!({
            "checkout_id": "CKO1",
            "isbn": "111",
            "title": "Dune",
            "customer_id": "C1",
            "checkout_date": "2024-05-01",
            "due_date": "2024-05-15",
        }), serde_json::to_value(&checkout).expect("should serialize"));
    }

    #[tokio::test]
    async fn test_should_serialize_return() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 3).expect("valid date");
        assert_eq!(json!({
            "message": "Book returned successfully",
            "isbn": "111",
            "customer_id": "C1",
            "return_date": "2024-05-03",
        }), serde_json::to_value(ReturnDto::new("111", "C1", today)).expect("should serialize"));
    }
}
