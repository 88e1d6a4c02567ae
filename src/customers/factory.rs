use crate::core::domain::Configuration;
use crate::core::repository::SharedStore;
use crate::customers::domain::CustomerService;
use crate::customers::domain::service::CustomerServiceImpl;

pub(crate) fn create_customer_service(config: &Configuration, store: &SharedStore) -> Box<dyn CustomerService> {
    Box::new(CustomerServiceImpl::new(config, store.clone()))
}
