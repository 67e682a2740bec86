//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog record. `quantity` is the number of copies currently on the shelf.
///
/// Every field defaults when absent from a request body, so `{}` decodes
/// to a book with empty strings and no copies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Book identifier
    pub id: String,
    pub title: String,
    pub author: String,
    /// Copies available for checkout
    pub quantity: u32,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }
}

/// Plain `{"message": ...}` response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Records loaded into the catalog at startup
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("1", "Hello World Java", "Havish", 5),
        Book::new("2", "Think Like A monk", "Jay Shetty", 10),
        Book::new("3", "Find Smiles Inside", "Romero", 4),
    ]
}
