//! Store interfaces and provider dispatch.
//!
//! Services receive `Arc<dyn UserStore>` / `Arc<dyn EventStore>` constructed
//! once at process start — there is no module-level connection singleton.
//! [`Stores::connect`] selects the implementation from configuration.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use eventline_core::config::database::DatabaseConfig;
use eventline_core::error::AppError;
use eventline_core::result::AppResult;
use eventline_core::types::pagination::{PageRequest, PageResponse};
use eventline_entity::event::{Event, EventWithCreator, NewEvent};
use eventline_entity::user::{NewUser, User};

/// Persistence interface for user records.
#[async_trait]
pub trait UserStore: Send + Sync + fmt::Debug {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email. Exact, case-sensitive match as stored.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users in creation order.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Create a new user. Fails with a conflict if the email is taken.
    async fn create(&self, data: &NewUser) -> AppResult<User>;

    /// Record one failed login attempt as a single atomic update.
    ///
    /// Increments the failure counter; when the new value exceeds
    /// `max_failed`, the same update flags the account locked and stores
    /// `lock_until`. Returns the updated record. Must not lose updates
    /// under concurrent logins for the same account.
    async fn record_failed_attempt(
        &self,
        id: Uuid,
        max_failed: i32,
        lock_until: DateTime<Utc>,
    ) -> AppResult<User>;

    /// Zero the failure counter, clear the lock flag and deadline.
    async fn reset_failed_attempts(&self, id: Uuid) -> AppResult<()>;

    /// Delete a user. The user's events go with it (cascade).
    /// Returns `true` if a record was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Persistence interface for event records.
#[async_trait]
pub trait EventStore: Send + Sync + fmt::Debug {
    /// Find an event by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>>;

    /// Find an event by primary key, annotated with its creator.
    async fn find_with_creator(&self, id: Uuid) -> AppResult<Option<EventWithCreator>>;

    /// List events in insertion order with pagination, each annotated
    /// with its creator's id and name.
    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<EventWithCreator>>;

    /// Create a new event.
    async fn create(&self, data: &NewEvent) -> AppResult<Event>;

    /// Persist an already-loaded, modified event record.
    async fn update(&self, event: &Event) -> AppResult<Event>;

    /// Delete an event by ID. Returns `true` if a record was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// The set of stores backing the application, selected at construction
/// time based on configuration.
#[derive(Debug, Clone)]
pub struct Stores {
    /// User store.
    pub users: Arc<dyn UserStore>,
    /// Event store.
    pub events: Arc<dyn EventStore>,
}

impl Stores {
    /// Build the configured store provider.
    ///
    /// `postgres` connects a pool and runs pending migrations; `memory`
    /// creates a fresh process-local store.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                let pool = crate::connection::DatabasePool::connect(config).await?;
                crate::migration::run_migrations(pool.pool()).await?;

                Ok(Self {
                    users: Arc::new(crate::repositories::user::UserRepository::new(
                        pool.pool().clone(),
                    )),
                    events: Arc::new(crate::repositories::event::EventRepository::new(
                        pool.pool().clone(),
                    )),
                })
            }
            "memory" => {
                info!("Initializing in-memory store provider");
                Ok(Self::in_memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown store provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Create a fresh in-memory store set sharing one backing database.
    pub fn in_memory() -> Self {
        let db = Arc::new(crate::memory::MemoryDatabase::new());
        Self {
            users: Arc::new(crate::memory::MemoryUserStore::new(Arc::clone(&db))),
            events: Arc::new(crate::memory::MemoryEventStore::new(db)),
        }
    }
}
