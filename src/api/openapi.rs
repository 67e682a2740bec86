//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        description = "In-memory book lending REST API"
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books,
        books::create_book,
        books::get_book,
        books::delete_book,
        // Loans
        loans::checkout_book,
        loans::return_book,
    ),
    components(
        schemas(
            crate::models::Book,
            crate::models::MessageResponse,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog management"),
        (name = "loans", description = "Checkout and return")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
