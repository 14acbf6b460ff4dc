//! API middleware stack

mod auth;

pub use auth::{auth_middleware, extract_bearer_token, AuthContext};
