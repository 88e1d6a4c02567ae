use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

// BookDto is the wire representation of a book for the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub copies: i64,
    pub available_copies: i64,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            copies: other.copies,
            available_copies: other.available_copies,
        }
    }
}
