//! Auth handlers — register and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use eventline_entity::user::User;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::LoginResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state
        .auth_service
        .register(req.name.as_deref(), req.email.as_deref(), req.password.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = state
        .auth_service
        .login(req.email.as_deref(), req.password.as_deref())
        .await?;

    Ok(Json(LoginResponse {
        message: "login successful".to_string(),
        token,
    }))
}
