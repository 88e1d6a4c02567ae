use axum::{
    extract::State,
    response::Json,
};
use crate::admin::command::reset_system_cmd::{ResetSystemCommand, ResetSystemCommandRequest, ResetSystemCommandResponse};
use crate::admin::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};

pub(crate) async fn reset_system(
    State(state): State<AppState>) -> Result<Json<ResetSystemCommandResponse>, ServerError> {
    tracing::info!("reset_system called");
    let svc = factory::create_admin_service(&state.config, &state.store);
    let res = ResetSystemCommand::new(svc).execute(ResetSystemCommandRequest::default()).await?;
    Ok(Json(res))
}
