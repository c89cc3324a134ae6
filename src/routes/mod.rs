//! Routers per concern and the assembled application.

mod api;
mod common;
mod graphql;

pub use api::api_routes;
pub use common::common_routes;
pub use graphql::graphql_routes;

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::config::AppConfig;
use crate::state::AppState;

/// The full application: operational routes at the root, entity CRUD and
/// registration under /api, GraphQL at /graphql.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state.clone()))
        .merge(graphql_routes(state))
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
}
