use async_trait::async_trait;
use serde::Serialize;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::ReturnDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::core::validation::ValidatedFields;

pub(crate) struct ReturnBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ReturnBookCommandRequest {
    isbn: String,
    customer_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(isbn: &str, customer_id: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            customer_id: customer_id.to_string(),
        }
    }
}

impl TryFrom<&ValidatedFields> for ReturnBookCommandRequest {
    type Error = LibraryError;

    fn try_from(fields: &ValidatedFields) -> Result<Self, Self::Error> {
        Ok(Self {
            isbn: fields.text("isbn")?,
            customer_id: fields.text("customer_id")?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct ReturnBookCommandResponse {
    pub receipt: ReturnDto,
}

impl ReturnBookCommandResponse {
    pub fn new(receipt: ReturnDto) -> Self {
        Self {
            receipt,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.checkout_service.returned(req.isbn.as_str(), req.customer_id.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
