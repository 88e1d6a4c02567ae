use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::SharedStore;

pub(crate) fn create_checkout_service(config: &Configuration, store: &SharedStore) -> Box<dyn CheckoutService> {
    Box::new(CheckoutServiceImpl::new(config, store.clone()))
}
