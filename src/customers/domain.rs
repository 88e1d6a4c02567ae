pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::customers::dto::CustomerDto;

#[async_trait]
pub(crate) trait CustomerService: Sync + Send {
    async fn add_customer(&self, name: &str, email: &str, customer_id: &str) -> LibraryResult<CustomerDto>;
    async fn find_customer_by_id(&self, customer_id: &str) -> LibraryResult<CustomerDto>;
}
