//! Registration and login orchestration, including the lockout policy.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use validator::ValidateEmail;

use eventline_core::config::auth::AuthConfig;
use eventline_core::error::AppError;
use eventline_database::store::UserStore;
use eventline_entity::user::{NewUser, User};

use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;

/// Authentication service: registration plus the login flow with
/// failed-attempt counting and timed lockout.
///
/// Lockout state machine per user: failures 1..=threshold leave the
/// account unlocked; the failure that pushes the counter past the
/// threshold locks it until `now + lockout` (that response is still an
/// invalid-credentials failure). A locked account rejects attempts without
/// touching password or counters while `lock_until` lies in the future;
/// once it has passed, the next attempt is evaluated as not-locked. Any
/// successful password match zeroes the counter and clears the lock.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Token issuer.
    jwt: JwtEncoder,
    /// Failed attempts tolerated before the account locks.
    max_failed_attempts: i32,
    /// How long a locked account stays locked.
    lockout: Duration,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        jwt: JwtEncoder,
        config: &AuthConfig,
    ) -> Self {
        Self {
            users,
            hasher,
            jwt,
            max_failed_attempts: config.max_failed_attempts,
            lockout: Duration::minutes(config.lockout_minutes as i64),
        }
    }

    /// Registers a new user.
    ///
    /// The password is hashed here, exactly once; the store only ever sees
    /// the digest.
    pub async fn register(
        &self,
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<User, AppError> {
        let (Some(name), Some(email), Some(password)) =
            (present(name), present(email), present(password))
        else {
            return Err(AppError::validation("name, email and password required"));
        };

        if !email.validate_email() {
            return Err(AppError::validation("invalid email format"));
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("user already exists"));
        }

        let password_hash = self.hasher.hash(password)?;
        let user = self
            .users
            .create(&NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Performs a login attempt and returns a signed bearer token.
    ///
    /// Unknown email and wrong password produce the same failure, so the
    /// response does not reveal which one it was. The user record is
    /// mutated on every evaluated attempt — never on validation rejection,
    /// never while the lock window is active.
    pub async fn login(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, AppError> {
        let (Some(email), Some(password)) = (present(email), present(password)) else {
            return Err(AppError::validation("email and password required"));
        };

        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(AppError::invalid_credentials("invalid email or password"));
        };

        let now = Utc::now();
        if user.is_locked_at(now) {
            return Err(AppError::account_locked(
                "account temporarily locked, try again later",
            ));
        }

        if !self.hasher.verify(password, &user.password_hash)? {
            let updated = self
                .users
                .record_failed_attempt(user.id, self.max_failed_attempts, now + self.lockout)
                .await?;

            if updated.is_locked && !user.is_locked {
                warn!(
                    user_id = %user.id,
                    attempts = updated.failed_attempts,
                    lock_until = ?updated.lock_until,
                    "Account locked after repeated failed logins"
                );
            }
            return Err(AppError::invalid_credentials("invalid email or password"));
        }

        if user.failed_attempts > 0 || user.is_locked {
            self.users.reset_failed_attempts(user.id).await?;
        }

        let token = self.jwt.sign(&user)?;
        info!(user_id = %user.id, "Login successful");
        Ok(token)
    }
}

/// Missing and empty both count as "not provided".
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
