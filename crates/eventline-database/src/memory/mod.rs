//! In-memory store implementation.
//!
//! Backs development runs and tests. Both stores share one
//! [`MemoryDatabase`] so that user deletion can cascade to events the way
//! the SQL schema does with its foreign key.

pub mod event;
pub mod user;

use std::sync::Mutex;

use dashmap::DashMap;
use uuid::Uuid;

use eventline_entity::event::Event;
use eventline_entity::user::User;

pub use event::MemoryEventStore;
pub use user::MemoryUserStore;

/// Process-local tables shared by the in-memory stores.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    /// User records by id.
    pub(crate) users: DashMap<Uuid, User>,
    /// Event records by id.
    pub(crate) events: DashMap<Uuid, Event>,
    /// User ids in insertion order.
    pub(crate) user_order: Mutex<Vec<Uuid>>,
    /// Event ids in insertion order.
    pub(crate) event_order: Mutex<Vec<Uuid>>,
}

impl MemoryDatabase {
    /// Create an empty in-memory database.
    pub fn new() -> Self {
        Self::default()
    }
}
