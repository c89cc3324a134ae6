//! Warehouse API: products and categories CRUD over REST and GraphQL.

pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::app;
pub use state::AppState;
pub use store::{connect, ensure_schema, memory_pool};
