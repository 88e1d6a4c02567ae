use async_trait::async_trait;
use serde::Serialize;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListCustomerBooksCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ListCustomerBooksCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ListCustomerBooksCommandRequest {
    pub customer_id: String,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct ListCustomerBooksCommandResponse {
    pub checkouts: Vec<CheckoutDto>,
}

impl ListCustomerBooksCommandResponse {
    pub fn new(checkouts: Vec<CheckoutDto>) -> Self {
        Self {
            checkouts,
        }
    }
}

#[async_trait]
impl Command<ListCustomerBooksCommandRequest, ListCustomerBooksCommandResponse> for ListCustomerBooksCommand {
    async fn execute(&self, req: ListCustomerBooksCommandRequest) -> Result<ListCustomerBooksCommandResponse, CommandError> {
        self.checkout_service.find_checkouts_by_customer(req.customer_id.as_str())
            .await.map_err(CommandError::from).map(ListCustomerBooksCommandResponse::new)
    }
}
