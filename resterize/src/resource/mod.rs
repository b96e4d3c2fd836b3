//! Generic REST resource layer
//!
//! This module turns a [`crate::store::Collection`] plus an [`EntityConfig`]
//! into the standard CRUD handler set, with uniform error mapping.
//!
//! # Features
//!
//! - **Handler factory**: [`router`] produces the five CRUD handlers
//! - **Entity contract**: [`EntityConfig`] with typed input and public view
//! - **Error mapping**: [`ResourceError`] renders validation / not-found /
//!   unexpected failures as 400 / 404 / opaque 500
//! - **Injected time**: [`Clock`] keeps entity preparers deterministic under
//!   test
//!
//! # Example
//!
//! ```rust,ignore
//! use resterize::prelude::*;
//!
//! let app = Router::new()
//!     .nest("/ideas", resource::router(collection, IdeaConfig::new(clock)));
//! ```
//!
//! Every response path runs the stored record through the entity's
//! `publicize` before it leaves the process; no handler ever returns a raw
//! record.

mod entity;
mod error;
mod handlers;

// Re-export all public types
pub use entity::{Clock, EntityConfig, FieldError, SystemClock};
pub use error::ResourceError;
pub use handlers::{router, Resource};
