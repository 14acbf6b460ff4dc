//! Main server implementation for the Shelfmark API

use crate::{api, auth::FirebaseAuth, config::Config, error::Result};
use axum::Router;
use std::sync::Arc;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Main server structure
#[derive(Debug)]
pub struct Server {
    config: Arc<Config>,
    app: Router,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,

    /// Identity provider handle, constructed once at bootstrap
    pub auth: Arc<FirebaseAuth>,
}

impl Server {
    /// Create a new server instance.
    ///
    /// Builds the identity provider handle eagerly: a missing or invalid
    /// credentials file aborts startup here, before any listener is bound.
    pub async fn new(config: Config) -> Result<Self> {
        info!("Initializing Shelfmark API server");

        let config = Arc::new(config);

        let credentials_path = config.auth.resolve_credentials_path();
        info!(
            "Loading identity provider credentials from {}",
            credentials_path.display()
        );

        let auth = Arc::new(FirebaseAuth::from_credentials_file(
            &credentials_path,
            &config.auth,
        )?);
        info!(
            "Identity provider handle initialised for project {}",
            auth.project_id()
        );

        let state = AppState {
            config: config.clone(),
            auth,
        };

        let app = Self::build_router(state);

        Ok(Self { config, app })
    }

    /// Build the application router with all routes and middleware
    fn build_router(state: AppState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let middleware = ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(state.config.request_timeout()))
            .layer(cors);

        api::routes(state.clone())
            .merge(api::docs_routes())
            .layer(middleware)
            .with_state(state)
    }

    /// The assembled application router; used directly by tests.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Run the server until shutdown signal
    pub async fn run(self) -> Result<()> {
        let addr = self.config.server.bind_address;

        info!("Starting HTTP server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| crate::error::ApiError::Internal {
                message: format!("Failed to bind to address {addr}: {e}"),
            })?;

        info!("Shelfmark API listening on {}", addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| crate::error::ApiError::Internal {
                message: format!("Server error: {e}"),
            })?;

        Ok(())
    }
}

/// Shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            warn!("Received terminate signal, shutting down");
        },
    }
}
