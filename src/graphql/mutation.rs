//! Mutation root. Arguments mirror the REST drafts: everything optional
//! except the id on update and delete, with the services enforcing which
//! fields are required.

use async_graphql::{Context, Object};
use sqlx::SqlitePool;

use crate::graphql::Deleted;
use crate::model::{Category, CategoryDraft, Product, ProductDraft};
use crate::service::{CategoryService, ProductService};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_category(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
    ) -> async_graphql::Result<Category> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let draft = CategoryDraft { name };
        Ok(CategoryService::create(pool, &draft).await?)
    }

    async fn update_category(
        &self,
        ctx: &Context<'_>,
        id: i64,
        name: Option<String>,
    ) -> async_graphql::Result<Category> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let draft = CategoryDraft { name };
        Ok(CategoryService::update(pool, id, &draft).await?)
    }

    async fn delete_category(&self, ctx: &Context<'_>, id: i64) -> async_graphql::Result<Deleted> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        CategoryService::delete(pool, id).await?;
        Ok(Deleted { id })
    }

    async fn create_product(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
        quantity: Option<i64>,
        category: Option<i64>,
    ) -> async_graphql::Result<Product> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let draft = ProductDraft {
            name,
            description,
            price,
            quantity,
            category,
        };
        Ok(ProductService::create(pool, &draft).await?)
    }

    /// Updates overwrite every field from the arguments, omitted ones
    /// included, matching the REST semantics.
    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: i64,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
        quantity: Option<i64>,
        category: Option<i64>,
    ) -> async_graphql::Result<Product> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let draft = ProductDraft {
            name,
            description,
            price,
            quantity,
            category,
        };
        Ok(ProductService::update(pool, id, &draft).await?)
    }

    async fn delete_product(&self, ctx: &Context<'_>, id: i64) -> async_graphql::Result<Deleted> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        ProductService::delete(pool, id).await?;
        Ok(Deleted { id })
    }
}
