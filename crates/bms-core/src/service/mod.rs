//! Application services - business logic composed over ports.

mod post_service;

pub use post_service::PostService;
