use async_trait::async_trait;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::SharedStore;
use crate::customers::domain::CustomerService;
use crate::customers::dto::CustomerDto;

pub(crate) struct CustomerServiceImpl {
    store: SharedStore,
}

impl CustomerServiceImpl {
    pub(crate) fn new(_config: &Configuration, store: SharedStore) -> Self {
        CustomerServiceImpl {
            store,
        }
    }
}

#[async_trait]
impl CustomerService for CustomerServiceImpl {
    async fn add_customer(&self, name: &str, email: &str, customer_id: &str) -> LibraryResult<CustomerDto> {
        let mut store = self.store.lock().await;
        let existing = store.customers.contains_customer_id(customer_id);
        let customer = CustomerDto::from(store.customers.add_customer(name, email, customer_id));
        if existing {
            tracing::info!(customer_id, "customer updated");
        } else {
            tracing::info!(customer_id, "customer created");
        }
        Ok(customer)
    }

    async fn find_customer_by_id(&self, customer_id: &str) -> LibraryResult<CustomerDto> {
        let store = self.store.lock().await;
        store.customers.get_customer(customer_id).map(CustomerDto::from)
    }
}
