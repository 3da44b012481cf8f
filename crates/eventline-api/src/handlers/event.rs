//! Event handlers — public listing/lookup plus gated mutation.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use eventline_core::error::AppError;
use eventline_core::types::pagination::{PageRequest, PageResponse};
use eventline_entity::event::{Event, EventWithCreator};
use eventline_service::event::{CreateEventInput, UpdateEventInput};

use crate::dto::request::{CreateEventRequest, UpdateEventRequest};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /events
pub async fn list_events(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<PageResponse<EventWithCreator>>, ApiError> {
    let page = state.event_service.list(page).await?;
    Ok(Json(page))
}

/// GET /events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<EventWithCreator>, ApiError> {
    let id = parse_event_id(&event_id, format!("Event No. {event_id} not found"))?;
    let event = state.event_service.get(id).await?;
    Ok(Json(event))
}

/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let event = state
        .event_service
        .create(CreateEventInput {
            title: req.title,
            description: req.description,
            date: req.date,
            created_by: req.created_by,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /events/{event_id}
pub async fn update_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<String>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<Event>, ApiError> {
    let id = parse_event_id(&event_id, format!("Event {event_id} not found"))?;
    let event = state
        .event_service
        .update(
            id,
            UpdateEventInput {
                title: req.title,
                description: req.description,
                date: req.date,
                created_by: req.created_by,
            },
        )
        .await?;

    Ok(Json(event))
}

/// DELETE /events/{event_id}
pub async fn delete_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_event_id(&event_id, format!("Event No. {event_id} not found"))?;
    state.event_service.delete(id).await?;
    Ok(StatusCode::OK)
}

/// An id that does not parse cannot match any record, so it reports the
/// same not-found failure the lookup would.
fn parse_event_id(raw: &str, not_found_message: String) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError(AppError::not_found(not_found_message)))
}
