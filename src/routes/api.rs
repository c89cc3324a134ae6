//! REST routes for registration and entity CRUD.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, category, product};
use crate::state::AppState;

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/register", post(auth::register))
        .route("/categories", get(category::list).post(category::create))
        .route(
            "/categories/:id",
            get(category::read).put(category::update).delete(category::delete),
        )
        .route("/products", get(product::list).post(product::create))
        .route(
            "/products/:id",
            get(product::read).put(product::update).delete(product::delete),
        )
        .with_state(state)
}
