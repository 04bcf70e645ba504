//! Middleware modules.

pub mod auth;
pub mod error;

pub use auth::{Identity, OptionalIdentity};
pub use error::AppError;
