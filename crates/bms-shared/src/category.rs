//! GraphQL error categories, reported in each error's `classification` extension.

use serde::{Deserialize, Serialize};

/// Closed set of categories a GraphQL error can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Malformed or out-of-range input, rejected before the service runs.
    ValidationError,
    /// The operation ran but its data could not be produced (missing post, duplicate).
    DataFetchingException,
    /// No capability token was presented.
    Unauthorized,
    /// A token was presented but lacks the required scope.
    Forbidden,
    /// Anything else. Details are logged, not returned.
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::ValidationError => "ValidationError",
            ErrorCategory::DataFetchingException => "DataFetchingException",
            ErrorCategory::Unauthorized => "Unauthorized",
            ErrorCategory::Forbidden => "Forbidden",
            ErrorCategory::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_name_matches_as_str() {
        for category in [
            ErrorCategory::ValidationError,
            ErrorCategory::DataFetchingException,
            ErrorCategory::Unauthorized,
            ErrorCategory::Forbidden,
            ErrorCategory::InternalError,
        ] {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::Value::String(category.as_str().to_string()));
        }
    }
}
