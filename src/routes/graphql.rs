//! GraphQL endpoint: POST executes against the schema, GET serves the
//! GraphiQL explorer.

use async_graphql::http::GraphiQLSource;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};

use crate::state::AppState;

async fn execute(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub fn graphql_routes(state: AppState) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(execute))
        .with_state(state)
}
