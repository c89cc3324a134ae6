//! Product CRUD.
//!
//! Updates overwrite every mutable column from the incoming draft, absent
//! fields included, so a draft that omits `description` blanks a stored one.

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::model::{Product, ProductDraft};
use crate::service::{require_number, require_text};

const PRODUCT_COLUMNS: &str = "id, name, description, price, quantity, category_id";

pub struct ProductService;

impl ProductService {
    /// All products in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn create(pool: &SqlitePool, draft: &ProductDraft) -> Result<Product, AppError> {
        let name = require_text("name", draft.name.as_deref())?;
        let price = require_number("price", draft.price)?;
        let category_id = Self::resolve_category(pool, draft.category).await?;
        let sql = format!(
            "INSERT INTO products (name, description, price, quantity, category_id) \
             VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {PRODUCT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(name)
            .bind(draft.description.as_deref())
            .bind(price)
            .bind(draft.quantity)
            .bind(category_id)
            .fetch_one(pool)
            .await?;
        tracing::debug!(id = row.id, "product created");
        Ok(row)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Product, AppError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1");
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {id}")))
    }

    /// The lookup runs before validation, and only `name` is validated.
    /// Description, price, quantity and category are taken as given.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        draft: &ProductDraft,
    ) -> Result<Product, AppError> {
        Self::get(pool, id).await?;
        let name = require_text("name", draft.name.as_deref())?;
        let category_id = Self::resolve_category(pool, draft.category).await?;
        let sql = format!(
            "UPDATE products SET name = ?2, description = ?3, price = ?4, \
             quantity = ?5, category_id = ?6 WHERE id = ?1 RETURNING {PRODUCT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(name)
            .bind(draft.description.as_deref())
            .bind(draft.price)
            .bind(draft.quantity)
            .bind(category_id)
            .fetch_one(pool)
            .await?;
        tracing::debug!(id, "product updated");
        Ok(row)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("product {id}")));
        }
        tracing::debug!(id, "product deleted");
        Ok(())
    }

    /// Resolves a category reference by lookup. An id that does not resolve
    /// is stored as absent rather than rejected.
    async fn resolve_category(
        pool: &SqlitePool,
        candidate: Option<i64>,
    ) -> Result<Option<i64>, AppError> {
        let Some(id) = candidate else {
            return Ok(None);
        };
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM categories WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryDraft;
    use crate::service::CategoryService;
    use crate::store::memory_pool;

    fn draft(name: &str, price: f64) -> ProductDraft {
        ProductDraft {
            name: Some(name.to_string()),
            price: Some(price),
            ..ProductDraft::default()
        }
    }

    async fn seed_category(pool: &SqlitePool, name: &str) -> i64 {
        let draft = CategoryDraft {
            name: Some(name.to_string()),
        };
        CategoryService::create(pool, &draft).await.unwrap().id
    }

    #[tokio::test]
    async fn create_requires_name_and_price() {
        let pool = memory_pool().await.unwrap();
        let missing_name = ProductDraft {
            price: Some(9.5),
            ..ProductDraft::default()
        };
        assert!(matches!(
            ProductService::create(&pool, &missing_name).await.unwrap_err(),
            AppError::Validation(_)
        ));
        let missing_price = ProductDraft {
            name: Some("Hammer".to_string()),
            ..ProductDraft::default()
        };
        assert!(matches!(
            ProductService::create(&pool, &missing_price).await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn create_accepts_zero_price() {
        let pool = memory_pool().await.unwrap();
        let created = ProductService::create(&pool, &draft("Sample", 0.0))
            .await
            .unwrap();
        assert_eq!(created.price, Some(0.0));
    }

    #[tokio::test]
    async fn create_links_an_existing_category() {
        let pool = memory_pool().await.unwrap();
        let category_id = seed_category(&pool, "Tools").await;
        let mut product = draft("Hammer", 9.5);
        product.category = Some(category_id);
        let created = ProductService::create(&pool, &product).await.unwrap();
        assert_eq!(created.category_id, Some(category_id));
    }

    #[tokio::test]
    async fn create_drops_an_unknown_category_reference() {
        let pool = memory_pool().await.unwrap();
        let mut product = draft("Hammer", 9.5);
        product.category = Some(42);
        let created = ProductService::create(&pool, &product).await.unwrap();
        assert_eq!(created.category_id, None);
    }

    #[tokio::test]
    async fn update_checks_existence_before_payload() {
        let pool = memory_pool().await.unwrap();
        let err = ProductService::update(&pool, 42, &ProductDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_requires_name_but_not_price() {
        let pool = memory_pool().await.unwrap();
        let created = ProductService::create(&pool, &draft("Hammer", 9.5))
            .await
            .unwrap();

        let no_name = ProductDraft {
            price: Some(12.0),
            ..ProductDraft::default()
        };
        assert!(matches!(
            ProductService::update(&pool, created.id, &no_name)
                .await
                .unwrap_err(),
            AppError::Validation(_)
        ));

        let no_price = ProductDraft {
            name: Some("Hammer".to_string()),
            ..ProductDraft::default()
        };
        let updated = ProductService::update(&pool, created.id, &no_price)
            .await
            .unwrap();
        assert_eq!(updated.price, None);
    }

    #[tokio::test]
    async fn update_overwrites_omitted_fields() {
        let pool = memory_pool().await.unwrap();
        let mut full = draft("Hammer", 9.5);
        full.description = Some("claw hammer".to_string());
        full.quantity = Some(3);
        let created = ProductService::create(&pool, &full).await.unwrap();

        let updated = ProductService::update(&pool, created.id, &draft("Hammer", 9.5))
            .await
            .unwrap();
        assert_eq!(updated.description, None);
        assert_eq!(updated.quantity, None);
    }

    #[tokio::test]
    async fn deleting_a_category_clears_product_references() {
        let pool = memory_pool().await.unwrap();
        let category_id = seed_category(&pool, "Tools").await;
        let mut product = draft("Hammer", 9.5);
        product.category = Some(category_id);
        let created = ProductService::create(&pool, &product).await.unwrap();

        CategoryService::delete(&pool, category_id).await.unwrap();
        let reloaded = ProductService::get(&pool, created.id).await.unwrap();
        assert_eq!(reloaded.category_id, None);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let pool = memory_pool().await.unwrap();
        let err = ProductService::delete(&pool, 42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let pool = memory_pool().await.unwrap();
        ProductService::create(&pool, &draft("Hammer", 9.5)).await.unwrap();
        ProductService::create(&pool, &draft("Wrench", 12.0)).await.unwrap();
        let all = ProductService::list(&pool).await.unwrap();
        let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Hammer", "Wrench"]);
    }
}
