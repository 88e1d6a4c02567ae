use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::Value;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;
use crate::core::repository::SharedStore;
use crate::core::validation::{validate, FieldRule, ValidatedFields};

#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) store: SharedStore,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        AppState {
            config,
            store: SharedStore::new(),
        }
    }
}

// ServerError is rendered as `{code, name, description}` with the matching status.
#[derive(Debug)]
pub(crate) struct ServerError {
    pub(crate) status: StatusCode,
    pub(crate) description: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: u16,
    name: String,
    description: String,
}

impl ServerError {
    pub fn new(status: StatusCode, description: &str) -> Self {
        Self { status, description: description.to_string() }
    }
}

pub(crate) fn parse_body(body: &[u8]) -> Result<Value, ServerError> {
    let json = serde_json::from_slice(body).map_err(LibraryError::from)?;
    Ok(json)
}

// Parses the body, runs the endpoint's field rules and builds the typed command request.
pub(crate) fn validated_request<R>(body: &[u8], rules: &[FieldRule]) -> Result<R, ServerError>
    where R: for<'a> TryFrom<&'a ValidatedFields, Error=LibraryError> {
    let json = parse_body(body)?;
    tracing::info!(body = %json, "request received");
    let fields = validate(&json, rules)?;
    Ok(R::try_from(&fields)?)
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::Conflict { .. } => StatusCode::CONFLICT,
            CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommandError::Runtime { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CommandError::Serialization { .. } => StatusCode::BAD_REQUEST,
            CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
        };
        ServerError::new(status, err.message())
    }
}

impl From<LibraryError> for ServerError {
    fn from(err: LibraryError) -> Self {
        ServerError::from(CommandError::from(err))
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let name = self.status.canonical_reason().unwrap_or("Unknown Error").to_string();
        if self.status.is_server_error() {
            tracing::error!(code = self.status.as_u16(), reason = %name, description = %self.description, "request failed");
        } else {
            tracing::warn!(code = self.status.as_u16(), reason = %name, description = %self.description, "request rejected");
        }
        let body = ErrorBody {
            code: self.status.as_u16(),
            name,
            description: self.description,
        };
        (self.status, Json(body)).into_response()
    }
}
