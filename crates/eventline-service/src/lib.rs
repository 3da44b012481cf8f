//! # eventline-service
//!
//! Business logic services for Eventline. Services are constructed once
//! at process start with the store interfaces they orchestrate.

pub mod event;
pub mod presence;
pub mod user;

pub use event::{CreateEventInput, EventService, UpdateEventInput};
pub use user::UserService;
