//! Authentication middleware
//!
//! Verifies the bearer credential on each request against the identity
//! provider and hands the resulting identity to the handler via request
//! extensions. Verification results are never cached; every request is
//! independently re-verified.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::{ApiError, Result},
    server::AppState,
};

/// Authenticated caller identity, extracted from a verified ID token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    /// Stable subject identifier assigned by the provider
    pub uid: String,

    /// Email address, when the provider attaches one
    pub email: Option<String>,

    /// Whether the provider has verified the email
    pub email_verified: bool,
}

/// Pull the bearer token out of the `Authorization` header.
///
/// An absent header, a non-bearer scheme, or an empty token all fail with
/// the same generic message; callers learn nothing about which check
/// tripped.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::MissingAuthentication {
            message: "missing or malformed credential".to_string(),
        })?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::MissingAuthentication {
            message: "missing or malformed credential".to_string(),
        })
}

/// Authentication middleware guarding identity-requiring routes.
///
/// Handlers layered behind this middleware never run unless verification
/// succeeds. Provider-side failures (including an unreachable key endpoint)
/// fail closed as 401; the provider's raw error is logged, not returned.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let token = extract_bearer_token(req.headers())?;

    let claims = state.auth.verify_id_token(token).await.map_err(|e| {
        warn!(error = %e, "bearer token verification failed");
        ApiError::Authentication {
            message: "invalid credential".to_string(),
        }
    })?;

    debug!(subject = %claims.sub, "request authenticated");

    let context = AuthContext {
        uid: claims.sub,
        email: claims.email,
        email_verified: claims.email_verified.unwrap_or(false),
    };

    // Store the identity in request extensions for the handler
    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_header_is_rejected() {
        let err = extract_bearer_token(&HeaderMap::new()).expect_err("must fail");
        assert!(matches!(err, ApiError::MissingAuthentication { .. }));
    }

    #[test]
    fn test_non_bearer_scheme_is_rejected() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        let err = extract_bearer_token(&headers).expect_err("must fail");
        assert!(matches!(err, ApiError::MissingAuthentication { .. }));
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let headers = headers_with_authorization("Bearer ");
        let err = extract_bearer_token(&headers).expect_err("must fail");
        assert!(matches!(err, ApiError::MissingAuthentication { .. }));
    }

    #[test]
    fn test_bearer_token_is_extracted() {
        let headers = headers_with_authorization("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers).unwrap(), "abc.def.ghi");
    }
}
