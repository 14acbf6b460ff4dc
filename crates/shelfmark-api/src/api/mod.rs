//! API module for the Shelfmark API

pub mod middleware;
pub mod routes;
pub mod types;

use crate::server::AppState;
use axum::{routing::get, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    // Identity-requiring routes; the guard runs before any handler body
    let protected = Router::new()
        .route("/users/me", get(routes::users::current_user))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/", get(routes::health::service_status))
        .merge(protected)
}

/// Create OpenAPI documentation routes
pub fn docs_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Adds the bearer token security scheme to the OpenAPI spec.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "ID token issued by the configured identity provider.",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::service_status,
        routes::users::current_user,
    ),
    components(schemas(
        types::ServiceStatusResponse,
        types::CurrentUserResponse,
        crate::error::ErrorResponse,
        crate::error::ErrorDetails,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "status", description = "Service status"),
        (name = "users", description = "Authenticated user lookup"),
    )
)]
pub struct ApiDoc;
