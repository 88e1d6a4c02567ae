use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::core::validation::ValidatedFields;

pub(crate) struct CheckoutBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CheckoutBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct CheckoutBookCommandRequest {
    isbn: String,
    customer_id: String,
    due_date: NaiveDate,
}

impl CheckoutBookCommandRequest {
    pub fn new(isbn: &str, customer_id: &str, due_date: NaiveDate) -> Self {
        Self {
            isbn: isbn.to_string(),
            customer_id: customer_id.to_string(),
            due_date,
        }
    }
}

impl TryFrom<&ValidatedFields> for CheckoutBookCommandRequest {
    type Error = LibraryError;

    fn try_from(fields: &ValidatedFields) -> Result<Self, Self::Error> {
        Ok(Self {
            isbn: fields.text("isbn")?,
            customer_id: fields.text("customer_id")?,
            due_date: fields.date("due_date")?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct CheckoutBookCommandResponse {
    pub checkout: CheckoutDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(checkout: CheckoutDto) -> Self {
        Self {
            checkout,
        }
    }
}

#[async_trait]
impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    async fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.checkout_service.checkout(req.isbn.as_str(), req.customer_id.as_str(), req.due_date)
            .await.map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
