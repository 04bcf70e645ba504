//! Authentication and authorization ports.

/// Claims carried by a capability token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub subject: String,
    pub scopes: Vec<String>,
    pub exp: i64,
}

impl TokenClaims {
    /// Check if the token grants a specific scope.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}

/// Token service trait for capability tokens.
pub trait TokenService: Send + Sync {
    /// Issue a token for `subject` granting `scopes`.
    fn generate_token(&self, subject: &str, scopes: &[String]) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}
