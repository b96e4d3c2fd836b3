//! Error types for service bootstrap
//!
//! Request-scoped failures have their own structured types
//! ([`crate::store::StoreError`], [`crate::resource::ResourceError`]); this
//! module covers everything that can go wrong before the first request is
//! served.

use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for configuration, startup, and serving
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration extraction failed
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    /// Binding or serving the listener failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Store access failed outside a request (e.g. startup connection)
    #[error("store error: {0}")]
    Store(#[from] crate::store::StoreError),

    /// Internal error with a descriptive message
    #[error("internal error: {0}")]
    Internal(String),
}
