//! Catalog service: listing, lookup, creation and removal of books

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }

    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.find_by_id(id).await
    }

    /// Append a book as received; no uniqueness check on `id`
    pub async fn create_book(&self, book: Book) -> Book {
        let created = self.repository.books.append(book).await;
        tracing::info!(id = %created.id, quantity = created.quantity, "Book created");
        created
    }

    /// Remove a book. An unknown id is reported as an invalid id.
    pub async fn delete_book(&self, id: &str) -> AppResult<Book> {
        let removed = self.repository.books.remove(id).await.map_err(|e| match e {
            AppError::NotFound(_) => {
                tracing::debug!(id, "Delete requested for unknown book");
                AppError::InvalidId("invalid id".to_string())
            }
            other => other,
        })?;
        tracing::info!(id = %removed.id, "Book deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::seed_books;

    fn service() -> CatalogService {
        CatalogService::new(Repository::new(seed_books()))
    }

    #[tokio::test]
    async fn get_seeded_book() {
        let book = service().get_book("1").await.unwrap();
        assert_eq!(book, Book::new("1", "Hello World Java", "Havish", 5));
    }

    #[tokio::test]
    async fn create_accepts_duplicate_ids() {
        let catalog = service();
        catalog
            .create_book(Book::new("3", "Another", "Author", 2))
            .await;

        let books = catalog.list_books().await;
        assert_eq!(books.len(), 4);
        assert_eq!(books[3].title, "Another");
        assert_eq!(catalog.get_book("3").await.unwrap().title, "Find Smiles Inside");
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let catalog = service();
        catalog.delete_book("2").await.unwrap();

        assert!(matches!(catalog.get_book("2").await, Err(AppError::NotFound(_))));
        assert_eq!(
            catalog.delete_book("2").await,
            Err(AppError::InvalidId("invalid id".to_string()))
        );
    }
}
