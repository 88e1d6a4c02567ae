use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::core::validation::ValidatedFields;
use crate::customers::domain::CustomerService;
use crate::customers::dto::CustomerDto;

pub(crate) struct AddCustomerCommand {
    customer_service: Box<dyn CustomerService>,
}

impl AddCustomerCommand {
    pub(crate) fn new(customer_service: Box<dyn CustomerService>) -> Self {
        Self {
            customer_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddCustomerCommandRequest {
    pub name: String,
    pub email: String,
    pub customer_id: String,
}

impl AddCustomerCommandRequest {
    pub fn new(name: &str, email: &str, customer_id: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            customer_id: customer_id.to_string(),
        }
    }
}

impl TryFrom<&ValidatedFields> for AddCustomerCommandRequest {
    type Error = LibraryError;

    fn try_from(fields: &ValidatedFields) -> Result<Self, Self::Error> {
        Ok(Self {
            name: fields.text("name")?,
            email: fields.text("email")?,
            customer_id: fields.text("customer_id")?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct AddCustomerCommandResponse {
    pub customer: CustomerDto,
}

impl AddCustomerCommandResponse {
    pub fn new(customer: CustomerDto) -> Self {
        Self {
            customer,
        }
    }
}

#[async_trait]
impl Command<AddCustomerCommandRequest, AddCustomerCommandResponse> for AddCustomerCommand {
    async fn execute(&self, req: AddCustomerCommandRequest) -> Result<AddCustomerCommandResponse, CommandError> {
        self.customer_service.add_customer(req.name.as_str(), req.email.as_str(), req.customer_id.as_str())
            .await.map_err(CommandError::from).map(AddCustomerCommandResponse::new)
    }
}
