//! Shared application state for all routes.

use crate::graphql::{build_schema, AppSchema};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub schema: AppSchema,
}

impl AppState {
    /// Builds the state, wiring the pool into the GraphQL schema so both
    /// transports share one storage session source.
    pub fn new(pool: SqlitePool) -> Self {
        let schema = build_schema(pool.clone());
        AppState { pool, schema }
    }
}
