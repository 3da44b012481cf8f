//! Event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An event created by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// Event title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// The user who created the event.
    pub created_by: Uuid,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    /// Event title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// The creating user.
    pub created_by: Uuid,
}

/// Creator summary attached to listed events: id and name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creator {
    /// Creator's user id.
    pub id: Uuid,
    /// Creator's display name.
    pub name: String,
}

/// An event annotated with its creator, as returned by list and get.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventWithCreator {
    /// The event record.
    #[serde(flatten)]
    pub event: Event,
    /// The creating user's id and name.
    pub user: Creator,
}
