//! # eventline-api
//!
//! HTTP layer for Eventline. Request parsing, route dispatch, response
//! shaping, and the bearer-auth gate live here; all behavior is delegated
//! to the services carried in [`state::AppState`].

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
