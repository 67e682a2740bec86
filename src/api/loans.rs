//! Checkout and return endpoints

use axum::{extract::State, Json};

use crate::{
    error::{AppError, AppResult},
    models::{Book, MessageResponse},
};

use super::AppQuery;

/// First `id` value of the query string, if the key is present at all
fn first_id(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value)
}

/// Check out one copy of a book
#[utoipa::path(
    patch,
    path = "/checkout",
    tag = "loans",
    params(("id" = String, Query, description = "Book ID")),
    responses(
        (status = 200, description = "Book checked out", body = Book),
        (status = 400, description = "Missing id or no copies available", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<crate::AppState>,
    AppQuery(query): AppQuery<Vec<(String, String)>>,
) -> AppResult<Json<Book>> {
    let id = first_id(query)
        .ok_or_else(|| AppError::MissingParameter("missing id query parameter".to_string()))?;

    let book = state.services.loans.checkout(&id).await?;
    Ok(Json(book))
}

/// Return one copy of a book
#[utoipa::path(
    patch,
    path = "/return",
    tag = "loans",
    params(("id" = String, Query, description = "Book ID")),
    responses(
        (status = 200, description = "Book returned", body = Book),
        (status = 400, description = "Missing id", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    AppQuery(query): AppQuery<Vec<(String, String)>>,
) -> AppResult<Json<Book>> {
    let id = first_id(query)
        .ok_or_else(|| AppError::MissingParameter("missing query id parameter".to_string()))?;

    let book = state.services.loans.return_book(&id).await?;
    Ok(Json(book))
}
