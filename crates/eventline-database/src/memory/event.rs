//! In-memory [`EventStore`] implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use eventline_core::error::AppError;
use eventline_core::result::AppResult;
use eventline_core::types::pagination::{PageRequest, PageResponse};
use eventline_entity::event::{Creator, Event, EventWithCreator, NewEvent};

use crate::store::EventStore;

use super::MemoryDatabase;

/// In-memory event store over a shared [`MemoryDatabase`].
#[derive(Debug, Clone)]
pub struct MemoryEventStore {
    db: Arc<MemoryDatabase>,
}

impl MemoryEventStore {
    /// Create an event store view over the given database.
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }

    fn annotate(&self, event: Event) -> Option<EventWithCreator> {
        let creator = self.db.users.get(&event.created_by)?;
        Some(EventWithCreator {
            user: Creator {
                id: creator.id,
                name: creator.name.clone(),
            },
            event,
        })
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        Ok(self.db.events.get(&id).map(|entry| entry.clone()))
    }

    async fn find_with_creator(&self, id: Uuid) -> AppResult<Option<EventWithCreator>> {
        Ok(self
            .db
            .events
            .get(&id)
            .map(|entry| entry.clone())
            .and_then(|event| self.annotate(event)))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<EventWithCreator>> {
        let order = self.db.event_order.lock().expect("event order lock");
        let total = order.len() as u64;

        let data = order
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .filter_map(|id| self.db.events.get(id).map(|entry| entry.clone()))
            .filter_map(|event| self.annotate(event))
            .collect();

        Ok(PageResponse::new(total, page, data))
    }

    async fn create(&self, data: &NewEvent) -> AppResult<Event> {
        if !self.db.users.contains_key(&data.created_by) {
            return Err(AppError::not_found(format!(
                "User with id {} not found",
                data.created_by
            )));
        }

        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            description: data.description.clone(),
            date: data.date,
            created_by: data.created_by,
            created_at: now,
            updated_at: now,
        };

        self.db.events.insert(event.id, event.clone());
        self.db
            .event_order
            .lock()
            .expect("event order lock")
            .push(event.id);
        Ok(event)
    }

    async fn update(&self, event: &Event) -> AppResult<Event> {
        let mut entry = self
            .db
            .events
            .get_mut(&event.id)
            .ok_or_else(|| AppError::not_found(format!("Event {} not found", event.id)))?;

        entry.title = event.title.clone();
        entry.description = event.description.clone();
        entry.date = event.date;
        entry.created_by = event.created_by;
        entry.updated_at = Utc::now();

        Ok(entry.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let removed = self.db.events.remove(&id).is_some();
        if removed {
            self.db
                .event_order
                .lock()
                .expect("event order lock")
                .retain(|eid| *eid != id);
        }
        Ok(removed)
    }
}
