//! # BMS Shared
//!
//! Wire types shared between the API server and its clients.

pub mod category;
pub mod response;

pub use category::ErrorCategory;
pub use response::ErrorResponse;
