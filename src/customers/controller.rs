use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError, validated_request};
use crate::core::validation::CUSTOMER_FIELDS;
use crate::customers::command::add_customer_cmd::{AddCustomerCommand, AddCustomerCommandRequest, AddCustomerCommandResponse};
use crate::customers::command::get_customer_cmd::{GetCustomerCommand, GetCustomerCommandRequest, GetCustomerCommandResponse};
use crate::customers::domain::CustomerService;
use crate::customers::factory;

fn build_service(state: &AppState) -> Box<dyn CustomerService> {
    factory::create_customer_service(&state.config, &state.store)
}

pub(crate) async fn add_customer(
    State(state): State<AppState>,
    body: Bytes) -> Result<(StatusCode, Json<AddCustomerCommandResponse>), ServerError> {
    let req: AddCustomerCommandRequest = validated_request(&body, CUSTOMER_FIELDS)?;
    let res = AddCustomerCommand::new(build_service(&state)).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<String>) -> Result<Json<GetCustomerCommandResponse>, ServerError> {
    tracing::info!(customer_id = %customer_id, "get_customer called");
    let req = GetCustomerCommandRequest { customer_id };
    let res = GetCustomerCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}
