//! API types for the Shelfmark API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static confirmation payload served at the service root
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatusResponse {
    /// Confirmation message
    pub message: String,
}

/// Identity of the authenticated caller
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CurrentUserResponse {
    /// Stable subject identifier assigned by the identity provider
    pub uid: String,

    /// Email address attached to the identity, if any
    pub email: Option<String>,
}
