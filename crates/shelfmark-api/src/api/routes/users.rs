//! User route handlers

use axum::{Extension, Json};
use tracing::debug;

use crate::api::middleware::AuthContext;
use crate::api::types::CurrentUserResponse;

/// Return the authenticated caller's identity
///
/// The authentication middleware has already verified the bearer token and
/// stashed the identity in request extensions; this handler only runs for
/// authenticated requests.
#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "Authenticated caller identity", body = CurrentUserResponse),
        (status = 401, description = "Missing or invalid credential", body = crate::error::ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "users",
)]
pub async fn current_user(Extension(context): Extension<AuthContext>) -> Json<CurrentUserResponse> {
    debug!(uid = %context.uid, "serving current user lookup");

    Json(CurrentUserResponse {
        uid: context.uid,
        email: context.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_identity_passes_through() {
        let context = AuthContext {
            uid: "abc".to_string(),
            email: Some("a@b.com".to_string()),
            email_verified: true,
        };

        let Json(body) = current_user(Extension(context)).await;
        assert_eq!(body.uid, "abc");
        assert_eq!(body.email.as_deref(), Some("a@b.com"));
    }

    #[tokio::test]
    async fn test_identity_without_email() {
        let context = AuthContext {
            uid: "anon-uid".to_string(),
            email: None,
            email_verified: false,
        };

        let Json(body) = current_user(Extension(context)).await;
        assert_eq!(body.uid, "anon-uid");
        assert!(body.email.is_none());
    }
}
