//! Core shared traits and utilities for Shelfmark services.
//!
//! Keeps the pieces every Shelfmark binary needs in one place: the
//! configuration loading contract, the base error trait, and unified
//! logging initialization.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ConfigLoader, ConfigurationError};
pub use error::ShelfmarkError;
