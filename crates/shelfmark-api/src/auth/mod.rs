//! Identity provider integration

pub mod firebase;

pub use firebase::{FirebaseAuth, IdTokenClaims, Jwk, JwkSet, ServiceAccountKey};
