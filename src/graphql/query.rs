//! Query root: single and list lookups for both entities.

use async_graphql::{Context, Object};
use sqlx::SqlitePool;

use crate::graphql::found_or_none;
use crate::model::{Category, Product};
use crate::service::{CategoryService, ProductService};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single category, or null when the id is absent or unknown.
    async fn category(
        &self,
        ctx: &Context<'_>,
        id: Option<i64>,
    ) -> async_graphql::Result<Option<Category>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let pool = ctx.data_unchecked::<SqlitePool>();
        found_or_none(CategoryService::get(pool, id).await)
    }

    async fn categories(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Category>> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        Ok(CategoryService::list(pool).await?)
    }

    /// A single product, or null when the id is absent or unknown.
    async fn product(
        &self,
        ctx: &Context<'_>,
        id: Option<i64>,
    ) -> async_graphql::Result<Option<Product>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let pool = ctx.data_unchecked::<SqlitePool>();
        found_or_none(ProductService::get(pool, id).await)
    }

    async fn products(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Product>> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        Ok(ProductService::list(pool).await?)
    }
}
