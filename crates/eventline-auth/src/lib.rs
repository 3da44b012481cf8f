//! # eventline-auth
//!
//! Authentication for Eventline: JWT encoding/verification, Argon2
//! password hashing, and the registration/login service with its
//! failed-attempt lockout policy.

pub mod jwt;
pub mod password;
pub mod service;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use service::AuthService;
