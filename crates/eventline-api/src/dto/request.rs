//! Request DTOs.
//!
//! Every field is optional at the wire level; required-field validation
//! happens in the services so that error messages stay uniform.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request body (also used by `POST /users`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Event creation request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Event title.
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Event date, RFC 3339.
    pub date: Option<String>,
    /// Creating user id.
    pub created_by: Option<Uuid>,
}

/// Partial event update request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New date, RFC 3339.
    pub date: Option<String>,
    /// New creating user id.
    pub created_by: Option<Uuid>,
}
