//! Event repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use eventline_core::error::{AppError, ErrorKind};
use eventline_core::result::AppResult;
use eventline_core::types::pagination::{PageRequest, PageResponse};
use eventline_entity::event::{Creator, Event, EventWithCreator, NewEvent};

use crate::store::EventStore;

/// Columns selected when joining events with their creator.
const SELECT_WITH_CREATOR: &str = "SELECT e.id, e.title, e.description, e.date, e.created_by, \
            e.created_at, e.updated_at, u.id AS creator_id, u.name AS creator_name \
       FROM events e \
       JOIN users u ON u.id = e.created_by";

/// PostgreSQL-backed [`EventStore`].
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

/// Flat row shape produced by the events-with-creator join.
#[derive(Debug, FromRow)]
struct EventCreatorRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    date: DateTime<Utc>,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    creator_id: Uuid,
    creator_name: String,
}

impl From<EventCreatorRow> for EventWithCreator {
    fn from(row: EventCreatorRow) -> Self {
        Self {
            event: Event {
                id: row.id,
                title: row.title,
                description: row.description,
                date: row.date,
                created_by: row.created_by,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            user: Creator {
                id: row.creator_id,
                name: row.creator_name,
            },
        }
    }
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find event by id", e)
            })
    }

    async fn find_with_creator(&self, id: Uuid) -> AppResult<Option<EventWithCreator>> {
        let row = sqlx::query_as::<_, EventCreatorRow>(&format!(
            "{SELECT_WITH_CREATOR} WHERE e.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find event by id", e))?;

        Ok(row.map(EventWithCreator::from))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<EventWithCreator>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count events", e))?;

        let rows = sqlx::query_as::<_, EventCreatorRow>(&format!(
            "{SELECT_WITH_CREATOR} ORDER BY e.created_at ASC, e.id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))?;

        Ok(PageResponse::new(
            total as u64,
            page,
            rows.into_iter().map(EventWithCreator::from).collect(),
        ))
    }

    async fn create(&self, data: &NewEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (title, description, date, created_by) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.date)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("events_created_by_fkey") =>
            {
                AppError::not_found(format!("User with id {} not found", data.created_by))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create event", e),
        })
    }

    async fn update(&self, event: &Event) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "UPDATE events \
                SET title = $2, description = $3, date = $4, created_by = $5, updated_at = NOW() \
              WHERE id = $1 \
              RETURNING *",
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(event.created_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update event", e))?
        .ok_or_else(|| AppError::not_found(format!("Event {} not found", event.id)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))?;

        Ok(result.rows_affected() > 0)
    }
}
