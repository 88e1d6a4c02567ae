use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::SharedStore;

pub(crate) fn create_catalog_service(config: &Configuration, store: &SharedStore) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, store.clone()))
}
