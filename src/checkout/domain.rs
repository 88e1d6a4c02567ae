use async_trait::async_trait;
use chrono::NaiveDate;
use crate::checkout::dto::{CheckoutDto, ReturnDto};
use crate::core::library::LibraryResult;

pub mod model;
pub mod service;

#[async_trait]
pub(crate) trait CheckoutService: Sync + Send {
    async fn checkout(&self, isbn: &str, customer_id: &str, due_date: NaiveDate) -> LibraryResult<CheckoutDto>;
    async fn returned(&self, isbn: &str, customer_id: &str) -> LibraryResult<ReturnDto>;
    async fn find_checkout_by_id(&self, checkout_id: &str) -> LibraryResult<CheckoutDto>;
    async fn find_checkouts_by_customer(&self, customer_id: &str) -> LibraryResult<Vec<CheckoutDto>>;
}
