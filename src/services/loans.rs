//! Loan service: checking books out and taking them back

use crate::{error::AppResult, models::book::Book, repository::Repository};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Lend one copy. Fails without change when no copies remain.
    pub async fn checkout(&self, id: &str) -> AppResult<Book> {
        match self.repository.books.adjust_quantity(id, -1).await {
            Ok(book) => {
                tracing::info!(id, quantity = book.quantity, "Book checked out");
                Ok(book)
            }
            Err(e) => {
                tracing::debug!(id, error = %e, "Checkout refused");
                Err(e)
            }
        }
    }

    /// Take one copy back. There is no upper bound on the quantity.
    pub async fn return_book(&self, id: &str) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .adjust_quantity(id, 1)
            .await
            .map_err(|e| e.not_found_as("book not found"))?;
        tracing::info!(id, quantity = book.quantity, "Book returned");
        Ok(book)
    }
}
