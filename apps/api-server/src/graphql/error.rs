//! Mapping from domain failures to GraphQL error categories.

use async_graphql::{Error, ErrorExtensions};
use bms_core::DomainError;
use bms_shared::ErrorCategory;

/// Extension key carrying the [`ErrorCategory`].
pub const CLASSIFICATION: &str = "classification";

/// Category table for domain errors.
pub fn category_of(err: &DomainError) -> ErrorCategory {
    match err {
        DomainError::PostNotFound { .. } => ErrorCategory::DataFetchingException,
        DomainError::DuplicatePost => ErrorCategory::DataFetchingException,
        DomainError::Storage(_) => ErrorCategory::InternalError,
    }
}

/// Build a GraphQL error tagged with `category`.
pub fn categorized(category: ErrorCategory, message: impl Into<String>) -> Error {
    Error::new(message).extend_with(|_, ext| ext.set(CLASSIFICATION, category.as_str()))
}

pub fn validation_error(messages: &[String]) -> Error {
    categorized(ErrorCategory::ValidationError, messages.join(", "))
}

/// Internal failures keep their detail in the logs only.
pub fn internal_error(detail: impl std::fmt::Display) -> Error {
    tracing::error!(error = %detail, "Internal error while resolving request");
    categorized(ErrorCategory::InternalError, "Internal server error")
}

pub fn domain_error(err: DomainError) -> Error {
    match category_of(&err) {
        ErrorCategory::InternalError => internal_error(err),
        category => categorized(category, err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use bms_core::RepoError;

    use super::*;

    fn classification(err: &Error) -> Option<String> {
        let value = err.extensions.as_ref()?.get(CLASSIFICATION)?;
        match value {
            async_graphql::Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_not_found_is_data_fetching() {
        let err = domain_error(DomainError::PostNotFound { id: 6 });

        assert_eq!(err.message, "No post found for id - 6");
        assert_eq!(classification(&err).as_deref(), Some("DataFetchingException"));
    }

    #[test]
    fn test_duplicate_is_data_fetching() {
        let err = domain_error(DomainError::DuplicatePost);

        assert_eq!(err.message, "Post already exists!");
        assert_eq!(classification(&err).as_deref(), Some("DataFetchingException"));
    }

    #[test]
    fn test_storage_failure_is_hidden() {
        let err = domain_error(DomainError::Storage(RepoError::Query(
            "relation \"posts\" does not exist".to_string(),
        )));

        assert_eq!(err.message, "Internal server error");
        assert_eq!(classification(&err).as_deref(), Some("INTERNAL_ERROR"));
    }
}
