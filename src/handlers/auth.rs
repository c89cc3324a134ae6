//! User registration handler.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::error::AppError;
use crate::model::RegisterRequest;
use crate::service::UserService;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

pub async fn register(
    State(state): State<AppState>,
    body: Option<Json<RegisterRequest>>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let user = UserService::register(&state.pool, &req).await?;
    Ok((
        StatusCode::OK,
        Json(RegisterResponse {
            message: format!("User {} successfully created", user.name),
        }),
    ))
}
