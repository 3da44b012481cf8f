//! In-memory [`UserStore`] implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use eventline_core::error::AppError;
use eventline_core::result::AppResult;
use eventline_entity::user::{NewUser, User};

use crate::store::UserStore;

use super::MemoryDatabase;

/// In-memory user store over a shared [`MemoryDatabase`].
#[derive(Debug, Clone)]
pub struct MemoryUserStore {
    db: Arc<MemoryDatabase>,
}

impl MemoryUserStore {
    /// Create a user store view over the given database.
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.db.users.get(&id).map(|entry| entry.clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .db
            .users
            .iter()
            .find(|entry| entry.email == email)
            .map(|entry| entry.clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let order = self.db.user_order.lock().expect("user order lock");
        Ok(order
            .iter()
            .filter_map(|id| self.db.users.get(id).map(|entry| entry.clone()))
            .collect())
    }

    async fn create(&self, data: &NewUser) -> AppResult<User> {
        // The order lock doubles as a registration lock so the uniqueness
        // scan and the insert cannot interleave.
        let mut order = self.db.user_order.lock().expect("user order lock");

        if self.db.users.iter().any(|entry| entry.email == data.email) {
            return Err(AppError::conflict("user already exists"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            failed_attempts: 0,
            is_locked: false,
            lock_until: None,
            created_at: now,
            updated_at: now,
        };

        self.db.users.insert(user.id, user.clone());
        order.push(user.id);
        Ok(user)
    }

    async fn record_failed_attempt(
        &self,
        id: Uuid,
        max_failed: i32,
        lock_until: DateTime<Utc>,
    ) -> AppResult<User> {
        // get_mut holds the entry's shard lock, so the read-modify-write
        // cannot lose updates under concurrent logins.
        let mut entry = self
            .db
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::database("Failed to record failed attempt"))?;

        entry.failed_attempts += 1;
        if entry.failed_attempts > max_failed {
            entry.is_locked = true;
            entry.lock_until = Some(lock_until);
        }
        entry.updated_at = Utc::now();

        Ok(entry.clone())
    }

    async fn reset_failed_attempts(&self, id: Uuid) -> AppResult<()> {
        if let Some(mut entry) = self.db.users.get_mut(&id) {
            entry.failed_attempts = 0;
            entry.is_locked = false;
            entry.lock_until = None;
            entry.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let removed = self.db.users.remove(&id).is_some();
        if removed {
            let mut user_order = self.db.user_order.lock().expect("user order lock");
            user_order.retain(|uid| *uid != id);

            // Cascade, mirroring the foreign key in the SQL schema.
            let mut event_order = self.db.event_order.lock().expect("event order lock");
            self.db.events.retain(|_, event| event.created_by != id);
            event_order.retain(|eid| self.db.events.contains_key(eid));
        }
        Ok(removed)
    }
}
