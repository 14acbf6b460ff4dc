//! Service status route handler

use axum::Json;

use crate::api::types::ServiceStatusResponse;

/// Body returned by the root confirmation endpoint.
const SERVICE_RUNNING_BANNER: &str = "<h1>Service is running successfully</h1>";

/// Confirm the service is up
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = ServiceStatusResponse),
    ),
    tag = "status",
)]
pub async fn service_status() -> Json<ServiceStatusResponse> {
    Json(ServiceStatusResponse {
        message: SERVICE_RUNNING_BANNER.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_banner_is_stable() {
        let Json(body) = service_status().await;
        assert_eq!(body.message, "<h1>Service is running successfully</h1>");
    }
}
