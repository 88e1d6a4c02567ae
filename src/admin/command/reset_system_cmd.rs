use async_trait::async_trait;
use serde::Serialize;
use crate::admin::domain::AdminService;
use crate::admin::dto::ResetDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ResetSystemCommand {
    admin_service: Box<dyn AdminService>,
}

impl ResetSystemCommand {
    pub(crate) fn new(admin_service: Box<dyn AdminService>) -> Self {
        Self {
            admin_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ResetSystemCommandRequest {}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct ResetSystemCommandResponse {
    pub reset: ResetDto,
}

impl ResetSystemCommandResponse {
    pub fn new(reset: ResetDto) -> Self {
        Self {
            reset,
        }
    }
}

#[async_trait]
impl Command<ResetSystemCommandRequest, ResetSystemCommandResponse> for ResetSystemCommand {
    async fn execute(&self, _req: ResetSystemCommandRequest) -> Result<ResetSystemCommandResponse, CommandError> {
        self.admin_service.reset_system()
            .await.map_err(CommandError::from).map(ResetSystemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::admin::command::reset_system_cmd::{ResetSystemCommand, ResetSystemCommandRequest};
    use crate::admin::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::SharedStore;

    #[tokio::test]
    async fn test_should_run_reset_system() {
        let store = SharedStore::new();
        {
            let mut guard = store.lock().await;
            let _ = guard.books.add_book("Dune", "Herbert", "111", 1);
        }
        let cmd = ResetSystemCommand::new(factory::create_admin_service(&Configuration::new("test"), &store));
        let res = cmd.execute(ResetSystemCommandRequest::default()).await.expect("should reset");
        assert_eq!("System reset successful", res.reset.message.as_str());
        assert!(store.lock().await.books.is_empty());
    }
}
