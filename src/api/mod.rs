//! HTTP handlers for the Bookshelf pages

pub mod books;
pub mod flash;
pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(books::list_books))
        .route("/add", get(books::add_form).post(books::add_book))
        .route("/edit/:id", get(books::edit_form).post(books::update_rating))
        // POST only, so link prefetchers and crawlers never delete anything
        .route("/delete/:id", post(books::delete_book))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
}
