//! Capability token extraction.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, http::header, web};

use bms_core::ports::{AuthError, TokenClaims};

use super::error::AppError;
use crate::observability::RequestId;
use crate::state::AppState;

/// Identity proven by a capability token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject: String,
    pub scopes: Vec<String>,
}

impl Identity {
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            subject: claims.subject,
            scopes: claims.scopes,
        }
    }
}

/// Identity of the caller, `None` for anonymous requests.
///
/// A request without an `Authorization` header is anonymous. A header that
/// is present but malformed, or carries an invalid token, rejects the request.
pub struct OptionalIdentity(pub Option<Identity>);

fn authenticate(req: &HttpRequest) -> Result<Option<Identity>, AppError> {
    let request_id = req.extensions().get::<RequestId>().map(|id| id.0.clone());
    let reject = |source: AuthError| AppError::Unauthenticated {
        source,
        request_id: request_id.clone(),
    };

    let auth_header = match req.headers().get(header::AUTHORIZATION) {
        Some(value) => value,
        None => return Ok(None),
    };

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::Internal {
            detail: "AppState not found in app data".to_string(),
            request_id: request_id.clone(),
        })?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| reject(AuthError::InvalidToken("Invalid authorization header".to_string())))?;

    // Parse "Bearer <token>"
    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| reject(AuthError::InvalidToken("Expected Bearer token".to_string())))?;

    let claims = state.token_service.validate_token(token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected capability token");
        reject(e)
    })?;

    Ok(Some(Identity::from(claims)))
}

impl FromRequest for OptionalIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(OptionalIdentity))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::test::TestRequest;
    use bms_core::ports::TokenService;
    use bms_infra::{InMemoryPostRepository, JwtConfig, JwtTokenService};

    use super::*;

    fn state() -> AppState {
        AppState::with_repository(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(JwtTokenService::new(JwtConfig::default())),
            "profile",
        )
    }

    #[actix_rt::test]
    async fn test_no_header_is_anonymous() {
        let req = TestRequest::default()
            .app_data(web::Data::new(state()))
            .to_http_request();

        assert!(authenticate(&req).unwrap().is_none());
    }

    #[actix_rt::test]
    async fn test_valid_token_yields_identity() {
        let token = JwtTokenService::new(JwtConfig::default())
            .generate_token("writer", &["profile".to_string()])
            .unwrap();
        let req = TestRequest::default()
            .app_data(web::Data::new(state()))
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_http_request();

        let identity = authenticate(&req).unwrap().unwrap();

        assert_eq!(identity.subject, "writer");
        assert!(identity.has_scope("profile"));
    }

    #[actix_rt::test]
    async fn test_rejection_carries_request_id() {
        let req = TestRequest::default()
            .app_data(web::Data::new(state()))
            .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
            .to_http_request();
        req.extensions_mut()
            .insert(RequestId("req-7".to_string()));

        match authenticate(&req) {
            Err(AppError::Unauthenticated {
                source: AuthError::InvalidToken(_),
                request_id,
            }) => assert_eq!(request_id.as_deref(), Some("req-7")),
            other => panic!("expected an invalid token rejection, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_identity_scopes() {
        let identity = Identity::from(TokenClaims {
            subject: "writer".to_string(),
            scopes: vec!["openid".to_string(), "profile".to_string()],
            exp: 0,
        });

        assert_eq!(identity.subject, "writer");
        assert!(identity.has_scope("profile"));
        assert!(!identity.has_scope("admin"));
    }
}
