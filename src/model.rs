//! Entity records and request drafts.
//!
//! Entities are the single source of truth for SQL rows, REST JSON, and
//! GraphQL object types. Drafts are deserialized request payloads with
//! all-optional fields; the service layer decides which fields are required.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow, SimpleObject)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, FromRow, SimpleObject)]
#[graphql(complex)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    /// Referenced category id, or None when the reference is absent. REST
    /// emits this as `category`; GraphQL exposes a resolved `category` field
    /// instead (see the graphql module).
    #[serde(rename = "category")]
    #[graphql(skip)]
    pub category_id: Option<i64>,
}

/// Registered user. The password field holds the argon2 hash and the struct
/// is never serialized onto the wire.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryDraft {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    /// Category id to reference; resolved against the store, silently
    /// dropped when it does not resolve.
    pub category: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}
