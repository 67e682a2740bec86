//! Bookshelf Server
//!
//! A small REST JSON API over an in-memory catalog of books: listing,
//! lookup, creation, deletion, checkout and return.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use crate::config::AppConfig;
pub use error::{AppError, AppResult};

use models::book::seed_books;
use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build a fresh catalog, seeded unless `catalog.seed` is off
    pub fn new(config: AppConfig) -> Self {
        let books = if config.catalog.seed {
            seed_books()
        } else {
            Vec::new()
        };

        Self {
            config: Arc::new(config),
            services: Arc::new(Services::new(Repository::new(books))),
        }
    }
}
