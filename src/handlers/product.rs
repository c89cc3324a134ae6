//! Product route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::model::ProductDraft;
use crate::service::ProductService;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = ProductService::list(&state.pool).await?;
    Ok((StatusCode::OK, Json(rows)))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<ProductDraft>>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let draft = body.map(|Json(draft)| draft).unwrap_or_default();
    let row = ProductService::create(&state.pool, &draft).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id("product", &id_str)?;
    let row = ProductService::get(&state.pool, id).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Option<Json<ProductDraft>>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id("product", &id_str)?;
    let draft = body.map(|Json(draft)| draft).unwrap_or_default();
    let row = ProductService::update(&state.pool, id, &draft).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id("product", &id_str)?;
    ProductService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
