//! Category CRUD.

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::model::{Category, CategoryDraft};
use crate::service::require_text;

pub struct CategoryService;

impl CategoryService {
    /// All categories in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn create(pool: &SqlitePool, draft: &CategoryDraft) -> Result<Category, AppError> {
        let name = require_text("name", draft.name.as_deref())?;
        let row = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES (?1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        tracing::debug!(id = row.id, "category created");
        Ok(row)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("category {id}")))
    }

    /// The lookup runs before validation: updating an absent id reports
    /// NotFound even when the payload is also invalid.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        draft: &CategoryDraft,
    ) -> Result<Category, AppError> {
        Self::get(pool, id).await?;
        let name = require_text("name", draft.name.as_deref())?;
        let row = sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = ?2 WHERE id = ?1 RETURNING id, name",
        )
        .bind(id)
        .bind(name)
        .fetch_one(pool)
        .await?;
        tracing::debug!(id, "category updated");
        Ok(row)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("category {id}")));
        }
        tracing::debug!(id, "category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_pool;

    fn draft(name: &str) -> CategoryDraft {
        CategoryDraft {
            name: Some(name.to_string()),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let pool = memory_pool().await.unwrap();
        let first = CategoryService::create(&pool, &draft("Tools")).await.unwrap();
        let second = CategoryService::create(&pool, &draft("Garden")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn create_rejects_missing_name() {
        let pool = memory_pool().await.unwrap();
        let err = CategoryService::create(&pool, &CategoryDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn get_returns_what_create_stored() {
        let pool = memory_pool().await.unwrap();
        let created = CategoryService::create(&pool, &draft("Tools")).await.unwrap();
        let fetched = CategoryService::get(&pool, created.id).await.unwrap();
        assert_eq!(fetched.name, "Tools");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = memory_pool().await.unwrap();
        let err = CategoryService::get(&pool, 42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_checks_existence_before_payload() {
        let pool = memory_pool().await.unwrap();
        let err = CategoryService::update(&pool, 42, &CategoryDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_rejects_empty_name_on_existing_row() {
        let pool = memory_pool().await.unwrap();
        let created = CategoryService::create(&pool, &draft("Tools")).await.unwrap();
        let err = CategoryService::update(&pool, created.id, &draft(""))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_renames_in_place() {
        let pool = memory_pool().await.unwrap();
        let created = CategoryService::create(&pool, &draft("Tools")).await.unwrap();
        let updated = CategoryService::update(&pool, created.id, &draft("Hand Tools"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Hand Tools");
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let pool = memory_pool().await.unwrap();
        let created = CategoryService::create(&pool, &draft("Tools")).await.unwrap();
        CategoryService::delete(&pool, created.id).await.unwrap();
        let err = CategoryService::get(&pool, created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let pool = memory_pool().await.unwrap();
        let err = CategoryService::delete(&pool, 42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let pool = memory_pool().await.unwrap();
        CategoryService::create(&pool, &draft("Tools")).await.unwrap();
        CategoryService::create(&pool, &draft("Garden")).await.unwrap();
        let all = CategoryService::list(&pool).await.unwrap();
        let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Tools", "Garden"]);
    }
}
