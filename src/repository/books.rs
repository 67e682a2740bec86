//! In-memory book store

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// Ordered collection of books, shared by every request handler.
///
/// Lookups are linear scans in insertion order. Each mutating operation
/// finds and updates its record under a single write lock.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// All books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// First book with the given id
    pub async fn find_by_id(&self, id: &str) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Append a book. Duplicate ids are accepted; lookups return the earliest.
    pub async fn append(&self, book: Book) -> Book {
        let mut books = self.books.write().await;
        books.push(book.clone());
        book
    }

    /// Remove the first book with the given id, shifting later records down
    pub async fn remove(&self, id: &str) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;
        Ok(books.remove(index))
    }

    /// Apply `delta` to a book's quantity.
    ///
    /// Fails with `Unavailable` if the result would be negative; the record
    /// is left unchanged in that case.
    pub async fn adjust_quantity(&self, id: &str, delta: i64) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        let updated = i64::from(book.quantity) + delta;
        if updated < 0 {
            return Err(AppError::Unavailable("Book not available ".to_string()));
        }
        book.quantity = u32::try_from(updated)
            .map_err(|_| AppError::Unavailable("quantity out of range".to_string()))?;

        Ok(book.clone())
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::seed_books;

    #[tokio::test]
    async fn find_returns_first_match_in_insertion_order() {
        let repo = BooksRepository::new(seed_books());
        repo.append(Book::new("1", "Duplicate", "Someone", 1)).await;

        let book = repo.find_by_id("1").await.unwrap();
        assert_eq!(book.title, "Hello World Java");
        assert_eq!(repo.count().await, 4);
    }

    #[tokio::test]
    async fn find_missing_is_not_found() {
        let repo = BooksRepository::new(seed_books());
        assert!(matches!(
            repo.find_by_id("42").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn remove_shifts_later_records() {
        let repo = BooksRepository::new(seed_books());
        let removed = repo.remove("2").await.unwrap();
        assert_eq!(removed.title, "Think Like A monk");

        let ids: Vec<String> = repo.list().await.into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(repo.remove("2").await.is_err());
    }

    #[tokio::test]
    async fn adjust_quantity_never_goes_negative() {
        let repo = BooksRepository::new(vec![Book::new("a", "A", "B", 1)]);

        assert_eq!(repo.adjust_quantity("a", -1).await.unwrap().quantity, 0);
        assert_eq!(
            repo.adjust_quantity("a", -1).await,
            Err(AppError::Unavailable("Book not available ".to_string()))
        );
        assert_eq!(repo.find_by_id("a").await.unwrap().quantity, 0);
        assert_eq!(repo.adjust_quantity("a", 1).await.unwrap().quantity, 1);
    }

    #[tokio::test]
    async fn adjust_quantity_rejects_overflow() {
        let repo = BooksRepository::new(vec![Book::new("a", "A", "B", u32::MAX)]);
        assert!(matches!(
            repo.adjust_quantity("a", 1).await,
            Err(AppError::Unavailable(_))
        ));
        assert_eq!(repo.find_by_id("a").await.unwrap().quantity, u32::MAX);
    }

    #[tokio::test]
    async fn concurrent_checkouts_do_not_oversell() {
        let repo = BooksRepository::new(vec![Book::new("a", "A", "B", 10)]);

        let tasks: Vec<_> = (0..25)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.adjust_quantity("a", -1).await.is_ok() })
            })
            .collect();

        let mut succeeded = 0;
        for task in tasks {
            if task.await.unwrap() {
                succeeded += 1;
            }
        }

        assert_eq!(succeeded, 10);
        assert_eq!(repo.find_by_id("a").await.unwrap().quantity, 0);
    }
}
