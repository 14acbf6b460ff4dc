//! Base error trait for Shelfmark crate error types.

/// Marker trait implemented by every Shelfmark crate's top-level error enum.
///
/// Guarantees the error is a proper [`std::error::Error`] that can cross
/// task and thread boundaries.
pub trait ShelfmarkError: std::error::Error + Send + Sync + 'static {}
