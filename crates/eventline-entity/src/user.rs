//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user account.
///
/// The password hash never leaves the process: it is skipped during
/// serialization, so every external representation of a user excludes it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (unique, exact match as stored).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Number of consecutive failed login attempts.
    pub failed_attempts: i32,
    /// Whether the account is flagged as locked.
    pub is_locked: bool,
    /// Lock expiry. Left stale after expiry until the next successful login.
    pub lock_until: Option<DateTime<Utc>>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the account is inside an active lockout window.
    ///
    /// `lock_until` in the past (or absent) counts as not locked even when
    /// `is_locked` is still set; expiry is evaluated lazily at attempt time.
    pub fn is_locked_at(&self, now: DateTime<Utc>) -> bool {
        self.is_locked && self.lock_until.is_some_and(|until| until > now)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user(is_locked: bool, lock_until: Option<DateTime<Utc>>) -> User {
        User {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            password_hash: "hash".to_string(),
            failed_attempts: 0,
            is_locked,
            lock_until,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_locked_inside_window() {
        let now = Utc::now();
        let u = user(true, Some(now + Duration::minutes(2)));
        assert!(u.is_locked_at(now));
    }

    #[test]
    fn test_expired_lock_counts_as_unlocked() {
        let now = Utc::now();
        let u = user(true, Some(now - Duration::seconds(1)));
        assert!(!u.is_locked_at(now));
    }

    #[test]
    fn test_locked_flag_without_deadline_counts_as_unlocked() {
        let now = Utc::now();
        let u = user(true, None);
        assert!(!u.is_locked_at(now));
    }

    #[test]
    fn test_serialization_excludes_hash() {
        let u = user(false, None);
        let json = serde_json::to_value(&u).expect("serialize");
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(json.get("email").is_some());
    }
}
