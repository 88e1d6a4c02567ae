use async_trait::async_trait;
use crate::admin::domain::AdminService;
use crate::admin::dto::ResetDto;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::SharedStore;

pub(crate) struct AdminServiceImpl {
    branch_id: String,
    store: SharedStore,
}

impl AdminServiceImpl {
    pub(crate) fn new(config: &Configuration, store: SharedStore) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            store,
        }
    }
}

#[async_trait]
impl AdminService for AdminServiceImpl {
    // Holds the store lock so a reset never interleaves with a checkout or return.
    async fn reset_system(&self) -> LibraryResult<ResetDto> {
        let mut store = self.store.lock().await;
        if store.books.is_empty() && store.customers.is_empty() && store.checkouts.is_empty() {
            tracing::info!(branch = %self.branch_id, "system reset on empty store");
            return Ok(ResetDto::new());
        }
        let (books, customers, checkouts) = (store.books.len(), store.customers.len(), store.checkouts.len());
        store.reset();
        tracing::info!(branch = %self.branch_id, books, customers, checkouts, "system reset");
        Ok(ResetDto::new())
    }
}
