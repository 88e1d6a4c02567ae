use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::core::validation::ValidatedFields;

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
    pub(crate) copies: i64,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, copies: i64) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            copies,
        }
    }
}

impl TryFrom<&ValidatedFields> for AddBookCommandRequest {
    type Error = LibraryError;

    fn try_from(fields: &ValidatedFields) -> Result<Self, Self::Error> {
        Ok(Self {
            title: fields.text("title")?,
            author: fields.text("author")?,
            isbn: fields.text("isbn")?,
            copies: fields.integer("copies")?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(req.title.as_str(), req.author.as_str(), req.isbn.as_str(), req.copies)
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
