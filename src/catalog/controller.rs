use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError, validated_request};
use crate::core::validation::BOOK_FIELDS;

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, &state.store)
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req: AddBookCommandRequest = validated_request(&body, BOOK_FIELDS)?;
    let res = AddBookCommand::new(build_service(&state)).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    tracing::info!(isbn = %isbn, "get_book called");
    let req = GetBookCommandRequest { isbn };
    let res = GetBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}
