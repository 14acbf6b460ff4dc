//! # Shelfmark API
//!
//! A thin HTTP backend for the Shelfmark service.
//!
//! ## Features
//!
//! - **Service status**: unauthenticated confirmation endpoint at `/`
//! - **Authentication**: bearer ID tokens verified against the Firebase
//!   identity provider, enforced per-route by middleware
//! - **Current user lookup**: `/users/me` returns the verified caller's
//!   subject id and email
//! - **OpenAPI documentation**: auto-generated API documentation

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{ApiError, Result};
pub use server::{AppState, Server};

/// Version of the shelfmark-api crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
