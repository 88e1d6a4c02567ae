use crate::admin::domain::AdminService;
use crate::admin::domain::service::AdminServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::SharedStore;

pub(crate) fn create_admin_service(config: &Configuration, store: &SharedStore) -> Box<dyn AdminService> {
    Box::new(AdminServiceImpl::new(config, store.clone()))
}
