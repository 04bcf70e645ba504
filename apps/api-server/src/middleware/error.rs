//! HTTP-level errors rendered as RFC 7807 bodies.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use bms_core::ports::AuthError;
use bms_shared::ErrorResponse;

/// Failures that reject a request before it reaches the GraphQL executor.
#[derive(Debug)]
pub enum AppError {
    Unauthenticated {
        source: AuthError,
        request_id: Option<String>,
    },
    Internal {
        detail: String,
        request_id: Option<String>,
    },
}

impl AppError {
    fn request_id(&self) -> Option<&str> {
        match self {
            AppError::Unauthenticated { request_id, .. } | AppError::Internal { request_id, .. } => {
                request_id.as_deref()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthenticated { source, .. } => write!(f, "Unauthenticated: {}", source),
            AppError::Internal { detail, .. } => write!(f, "Internal error: {}", detail),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut error = match self {
            AppError::Unauthenticated { source, .. } => match source {
                AuthError::TokenExpired => ErrorResponse::new(401, "Token Expired")
                    .with_detail("The capability token has expired."),
                AuthError::InvalidToken(msg) => {
                    ErrorResponse::new(401, "Invalid Token").with_detail(msg.clone())
                }
                other => ErrorResponse::unauthorized().with_detail(other.to_string()),
            },
            AppError::Internal { detail, .. } => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        if let Some(request_id) = self.request_id() {
            error = error.with_request_id(request_id);
        }

        HttpResponse::build(self.status_code()).json(error)
    }
}
