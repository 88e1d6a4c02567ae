use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest, CheckoutBookCommandResponse};
use crate::checkout::command::get_checkout_cmd::{GetCheckoutCommand, GetCheckoutCommandRequest, GetCheckoutCommandResponse};
use crate::checkout::command::list_customer_books_cmd::{ListCustomerBooksCommand, ListCustomerBooksCommandRequest, ListCustomerBooksCommandResponse};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError, validated_request};
use crate::core::validation::{CHECKOUT_FIELDS, RETURN_FIELDS};

fn build_service(state: &AppState) -> Box<dyn CheckoutService> {
    factory::create_checkout_service(&state.config, &state.store)
}

pub(crate) async fn checkout_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<(StatusCode, Json<CheckoutBookCommandResponse>), ServerError> {
    let req: CheckoutBookCommandRequest = validated_request(&body, CHECKOUT_FIELDS)?;
    let res = CheckoutBookCommand::new(build_service(&state)).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn return_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let req: ReturnBookCommandRequest = validated_request(&body, RETURN_FIELDS)?;
    let res = ReturnBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_checkout_by_id(
    State(state): State<AppState>,
    Path(checkout_id): Path<String>) -> Result<Json<GetCheckoutCommandResponse>, ServerError> {
    tracing::info!(checkout_id = %checkout_id, "get_checkout called");
    let req = GetCheckoutCommandRequest { checkout_id };
    let res = GetCheckoutCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_customer_books(
    State(state): State<AppState>,
    Path(customer_id): Path<String>) -> Result<Json<ListCustomerBooksCommandResponse>, ServerError> {
    tracing::info!(customer_id = %customer_id, "list_customer_books called");
    let req = ListCustomerBooksCommandRequest { customer_id };
    let res = ListCustomerBooksCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}
