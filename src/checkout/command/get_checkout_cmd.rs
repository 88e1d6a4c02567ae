use async_trait::async_trait;
use serde::Serialize;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetCheckoutCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl GetCheckoutCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GetCheckoutCommandRequest {
    pub checkout_id: String,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct GetCheckoutCommandResponse {
    pub checkout: CheckoutDto,
}

impl GetCheckoutCommandResponse {
    pub fn new(checkout: CheckoutDto) -> Self {
        Self {
            checkout,
        }
    }
}

#[async_trait]
impl Command<GetCheckoutCommandRequest, GetCheckoutCommandResponse> for GetCheckoutCommand {
    async fn execute(&self, req: GetCheckoutCommandRequest) -> Result<GetCheckoutCommandResponse, CommandError> {
        self.checkout_service.find_checkout_by_id(req.checkout_id.as_str())
            .await.map_err(CommandError::from).map(GetCheckoutCommandResponse::new)
    }
}
