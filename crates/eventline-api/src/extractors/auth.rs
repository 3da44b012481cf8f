//! `AuthUser` extractor — pulls the JWT from the Authorization header,
//! verifies it, and resolves the authenticated user.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use eventline_core::error::AppError;
use eventline_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated user, available to handlers on gated routes.
///
/// Any failure — missing header, wrong scheme, bad signature, expiry, or a
/// token whose subject no longer exists — produces the same
/// `401 {"message": "Unauthorized"}` response.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl std::ops::Deref for AuthUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(unauthorized)?;

        let claims = state.jwt_decoder.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Bearer token rejected");
            unauthorized()
        })?;

        // A store failure here is a 500, not a 401; the token itself was fine.
        let user = state
            .users
            .find_by_id(claims.sub)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(unauthorized)?;

        Ok(AuthUser(user))
    }
}

fn unauthorized() -> ApiError {
    ApiError(AppError::unauthorized("Unauthorized"))
}
