pub mod service;

use async_trait::async_trait;
use crate::admin::dto::ResetDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait AdminService: Sync + Send {
    async fn reset_system(&self) -> LibraryResult<ResetDto>;
}
