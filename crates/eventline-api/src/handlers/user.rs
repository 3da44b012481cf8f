//! User handlers — gated listing and creation.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use eventline_entity::user::User;

use crate::dto::request::RegisterRequest;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

/// POST /users
///
/// Same semantics as `POST /register`, behind the bearer gate.
pub async fn create_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state
        .auth_service
        .register(req.name.as_deref(), req.email.as_deref(), req.password.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}
