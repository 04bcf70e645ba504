//! # BMS Core
//!
//! The domain layer of the blog management service.
//! This crate contains the post model, the storage and auth ports, and the
//! post service. It has no database or HTTP dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::PostService;
