//! GraphQL schema. Resolvers are thin adapters over the same services the
//! REST handlers call.

mod mutation;
mod query;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use async_graphql::{ComplexObject, Context, EmptySubscription, Schema, SimpleObject};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::model::{Category, Product};
use crate::service::CategoryService;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(pool: SqlitePool) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .finish()
}

/// Acknowledgment returned by delete mutations.
#[derive(SimpleObject)]
pub struct Deleted {
    pub id: i64,
}

#[ComplexObject]
impl Product {
    /// The referenced category, null when the reference is absent.
    async fn category(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Category>> {
        let Some(id) = self.category_id else {
            return Ok(None);
        };
        let pool = ctx.data_unchecked::<SqlitePool>();
        found_or_none(CategoryService::get(pool, id).await)
    }
}

/// Lookups resolve to null rather than a field error when nothing matches.
pub(crate) fn found_or_none<T>(result: Result<T, AppError>) -> async_graphql::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(AppError::NotFound(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
