//! Application state shared across all handlers.

use std::sync::Arc;

use eventline_auth::jwt::{JwtDecoder, JwtEncoder};
use eventline_auth::password::PasswordHasher;
use eventline_auth::service::AuthService;
use eventline_core::config::AppConfig;
use eventline_database::store::{Stores, UserStore};
use eventline_service::event::EventService;
use eventline_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// User store, consulted by the bearer-auth extractor.
    pub users: Arc<dyn UserStore>,
    /// JWT verifier.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration and login service.
    pub auth_service: Arc<AuthService>,
    /// User listing service.
    pub user_service: Arc<UserService>,
    /// Event CRUD service.
    pub event_service: Arc<EventService>,
}

impl AppState {
    /// Wires services over the given stores.
    pub fn new(config: Arc<AppConfig>, stores: Stores) -> Self {
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&stores.users),
            PasswordHasher::new(),
            JwtEncoder::new(&config.auth),
            &config.auth,
        ));
        let user_service = Arc::new(UserService::new(Arc::clone(&stores.users)));
        let event_service = Arc::new(EventService::new(
            Arc::clone(&stores.events),
            Arc::clone(&stores.users),
        ));

        Self {
            config,
            users: stores.users,
            jwt_decoder,
            auth_service,
            user_service,
            event_service,
        }
    }
}
