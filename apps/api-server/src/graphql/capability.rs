//! Capability check for mutating operations.

use async_graphql::{Context, Error};
use bms_core::ports::AuthError;
use bms_shared::ErrorCategory;

use super::error::{categorized, internal_error};
use crate::middleware::Identity;

/// Scope a caller's token must carry to mutate posts.
#[derive(Debug, Clone)]
pub struct CapabilityPolicy {
    pub required_scope: String,
}

impl CapabilityPolicy {
    pub fn new(required_scope: impl Into<String>) -> Self {
        Self {
            required_scope: required_scope.into(),
        }
    }

    pub fn check(&self, identity: Option<&Identity>) -> Result<(), AuthError> {
        match identity {
            None => Err(AuthError::MissingAuth),
            Some(identity) if identity.has_scope(&self.required_scope) => Ok(()),
            Some(_) => Err(AuthError::InsufficientPermissions),
        }
    }
}

fn auth_error(err: AuthError) -> Error {
    match err {
        AuthError::InsufficientPermissions => categorized(ErrorCategory::Forbidden, "Forbidden"),
        _ => categorized(ErrorCategory::Unauthorized, "Unauthorized"),
    }
}

/// Fails unless the request identity carries the configured scope.
pub fn require_capability(ctx: &Context<'_>) -> async_graphql::Result<()> {
    let policy = ctx
        .data::<CapabilityPolicy>()
        .map_err(|e| internal_error(e.message))?;
    let identity = ctx.data_opt::<Identity>();

    policy.check(identity).map_err(|e| {
        tracing::warn!(
            subject = identity.map(|i| i.subject.as_str()),
            required_scope = %policy.required_scope,
            "Mutation rejected: {}",
            e
        );
        auth_error(e)
    })
}
