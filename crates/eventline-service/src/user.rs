//! User listing over the store interface.

use std::sync::Arc;

use eventline_core::result::AppResult;
use eventline_database::store::UserStore;
use eventline_entity::user::User;

/// Read-side user operations. Creation goes through the auth service so
/// that passwords are hashed in exactly one place.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User store.
    users: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Lists all users in creation order.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }
}
