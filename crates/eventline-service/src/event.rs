//! Event CRUD operations over the store interfaces.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use eventline_core::error::AppError;
use eventline_core::result::AppResult;
use eventline_core::types::pagination::{PageRequest, PageResponse};
use eventline_database::store::{EventStore, UserStore};
use eventline_entity::event::{Event, EventWithCreator, NewEvent};

use crate::presence::{provided_id, provided_str};

/// Manages event listing, lookup, creation, partial update, and deletion.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Event store.
    events: Arc<dyn EventStore>,
    /// User store, consulted to resolve event creators.
    users: Arc<dyn UserStore>,
}

/// Input for event creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEventInput {
    /// Event title (required).
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Event date as an RFC 3339 string (required).
    pub date: Option<String>,
    /// Creating user (required).
    pub created_by: Option<Uuid>,
}

/// Input for partial event update. Every field is optional; absent and
/// empty values leave the stored value intact (see [`crate::presence`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventInput {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New date as an RFC 3339 string.
    pub date: Option<String>,
    /// New creating user.
    pub created_by: Option<Uuid>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(events: Arc<dyn EventStore>, users: Arc<dyn UserStore>) -> Self {
        Self { events, users }
    }

    /// Lists events in insertion order with pagination, each annotated
    /// with its creator's id and name.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<EventWithCreator>> {
        page.validate()?;
        self.events.find_all(&page).await
    }

    /// Fetches a single event with its creator.
    pub async fn get(&self, id: Uuid) -> AppResult<EventWithCreator> {
        self.events
            .find_with_creator(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event No. {id} not found")))
    }

    /// Creates a new event after validating input and resolving the
    /// creating user.
    pub async fn create(&self, input: CreateEventInput) -> AppResult<Event> {
        let (Some(title), Some(date), Some(created_by)) = (
            provided_str(input.title.as_deref()),
            provided_str(input.date.as_deref()),
            provided_id(input.created_by),
        ) else {
            return Err(AppError::validation(
                "Fields 'title', 'date', 'createdBy' required",
            ));
        };

        let date = parse_date(
            date,
            "invalid date format, required YYYY-MM-DDTHH:mm:ss.sssZ",
        )?;

        if self.users.find_by_id(created_by).await?.is_none() {
            return Err(AppError::not_found(format!(
                "User with id {created_by} not found"
            )));
        }

        let event = self
            .events
            .create(&NewEvent {
                title: title.to_string(),
                description: input.description,
                date,
                created_by,
            })
            .await?;

        info!(event_id = %event.id, created_by = %created_by, "Event created");
        Ok(event)
    }

    /// Applies a partial update. Only provided fields change; the
    /// presence rules treat empty values as absent.
    pub async fn update(&self, id: Uuid, input: UpdateEventInput) -> AppResult<Event> {
        let new_date = match provided_str(input.date.as_deref()) {
            Some(raw) => Some(parse_date(
                raw,
                "Invalid date format, required YYYY-MM-DDTHH:mm:ss.sssZ",
            )?),
            None => None,
        };

        let mut event = self
            .events
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))?;

        if let Some(title) = provided_str(input.title.as_deref()) {
            event.title = title.to_string();
        }
        if let Some(description) = provided_str(input.description.as_deref()) {
            event.description = Some(description.to_string());
        }
        if let Some(date) = new_date {
            event.date = date;
        }
        if let Some(created_by) = provided_id(input.created_by) {
            event.created_by = created_by;
        }

        self.events.update(&event).await
    }

    /// Deletes an event. A second delete of the same id reports not-found.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.events.delete(id).await? {
            return Err(AppError::not_found(format!("Event No. {id} not found")));
        }
        info!(event_id = %id, "Event deleted");
        Ok(())
    }
}

/// Parses an RFC 3339 timestamp, mapping failure to a validation error
/// with the caller's message.
fn parse_date(raw: &str, message: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::validation(message))
}
