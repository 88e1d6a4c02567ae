use serde::{Deserialize, Serialize};
use crate::customers::domain::model::CustomerEntity;

// CustomerDto is the public view of a customer; the open checkout counter stays internal.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct CustomerDto {
    pub name: String,
    pub email: String,
    pub customer_id: String,
}

impl From<&CustomerEntity> for CustomerDto {
    fn from(other: &CustomerEntity) -> Self {
        Self {
            name: other.name.to_string(),
            email: other.email.to_string(),
            customer_id: other.customer_id.to_string(),
        }
    }
}
