use axum::{
    body::{Bytes, HttpBody},
    http::{Method, StatusCode, Uri},
    routing::{get, post},
    BoxError, Router,
};
use crate::admin::controller::reset_system;
use crate::catalog::controller::{add_book, find_book_by_isbn};
use crate::checkout::controller::{checkout_book, find_checkout_by_id, find_customer_books, return_book};
use crate::core::controller::{AppState, ServerError};
use crate::core::domain::{Configuration, ServeMode};
use crate::customers::controller::{add_customer, find_customer_by_id};

/// Builds the `/api` router over any request body type, so the same routes
/// serve hyper requests and API gateway events.
pub fn build_router<B>(state: AppState) -> Router<(), B>
    where B: HttpBody<Data = Bytes> + Send + 'static,
          B::Error: Into<BoxError> {
    Router::new()
        .route("/api/books", post(add_book).fallback(method_not_allowed))
        .route("/api/books/:isbn", get(find_book_by_isbn).fallback(method_not_allowed))
        .route("/api/customers", post(add_customer).fallback(method_not_allowed))
        .route("/api/customers/:customer_id", get(find_customer_by_id).fallback(method_not_allowed))
        .route("/api/customers/:customer_id/books", get(find_customer_books).fallback(method_not_allowed))
        .route("/api/checkouts", post(checkout_book).fallback(method_not_allowed))
        .route("/api/checkouts/:checkout_id", get(find_checkout_by_id).fallback(method_not_allowed))
        .route("/api/returns", post(return_book).fallback(method_not_allowed))
        .route("/api/reset", post(reset_system).fallback(method_not_allowed))
        .fallback(route_not_found)
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> ServerError {
    ServerError::new(StatusCode::NOT_FOUND, format!("no route for {}", uri.path()).as_str())
}

async fn method_not_allowed(method: Method, uri: Uri) -> ServerError {
    ServerError::new(StatusCode::METHOD_NOT_ALLOWED,
                     format!("{} is not allowed for {}", method, uri.path()).as_str())
}

// See https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html for the lambda mode.
pub async fn serve(config: Configuration) -> Result<(), lambda_http::Error> {
    let serve_mode = config.serve_mode;
    let bind_addr = config.bind_addr;
    tracing::info!(branch = %config.branch_id, max_checkouts = config.max_checkouts,
        mode = %serve_mode, addr = %bind_addr, "starting library service");
    let state = AppState::new(config);

    match serve_mode {
        ServeMode::Http => {
            let app: Router = build_router(state);
            axum::Server::bind(&bind_addr)
                .serve(app.into_make_service())
                .await?;
            Ok(())
        }
        ServeMode::Lambda => {
            let app: Router<(), lambda_http::Body> = build_router(state);
            lambda_http::run(app).await
        }
    }
}
