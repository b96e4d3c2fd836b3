//! # resterize
//!
//! Turn a document-store collection into a complete REST resource.
//!
//! A resource is assembled from two parts: a [`store::Collection`] giving
//! uniform async access to one document collection, and a
//! [`resource::EntityConfig`] describing how one entity type validates,
//! prepares, and projects its documents. [`resource::router`] combines the
//! two into the five standard CRUD handlers (list, create, get, update,
//! remove) with uniform error mapping.
//!
//! ## Example
//!
//! ```rust,no_run
//! use resterize::prelude::*;
//!
//! # #[derive(Clone)] struct WidgetConfig;
//! # #[derive(serde::Deserialize)] struct WidgetDraft;
//! # #[derive(serde::Serialize)] struct Widget;
//! # impl EntityConfig for WidgetConfig {
//! #     type Input = WidgetDraft;
//! #     type Public = Widget;
//! #     fn name(&self) -> &'static str { "widget" }
//! #     fn validate(&self, _: &WidgetDraft, _: bool) -> Vec<FieldError> { vec![] }
//! #     fn prepare(&self, _: WidgetDraft, _: bool) -> Document { Document::new() }
//! #     fn publicize(&self, _: Document) -> Widget { Widget }
//! # }
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Load configuration
//!     let config = Config::load_for_service("widgets-api")?;
//!
//!     // Initialize tracing
//!     init_tracing(&config)?;
//!
//!     // Wire a collection and an entity configuration into a router
//!     let app = Router::new()
//!         .route("/health", get(health))
//!         .nest("/widgets", resource::router(MemoryCollection::new(), WidgetConfig));
//!
//!     // Run server
//!     Server::new(config).serve(app).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod health;
pub mod observability;
pub mod resource;
pub mod server;
pub mod store;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, MiddlewareConfig, ServiceConfig, StoreConfig};

    pub use crate::error::{Error, Result};

    pub use crate::health::health;
    pub use crate::observability::init_tracing;
    pub use crate::server::Server;

    pub use crate::resource::{
        self, Clock, EntityConfig, FieldError, Resource, ResourceError, SystemClock,
    };
    pub use crate::store::{
        Collection, Document, Filter, MemoryCollection, StoreError, StoreErrorKind,
        StoreOperation, StoreResult, ID_FIELD,
    };

    #[cfg(feature = "mongodb")]
    pub use crate::store::mongo::{self, MongoCollection};

    pub use axum::{
        extract::{Path, Query, State},
        http::{HeaderMap, HeaderValue, StatusCode},
        response::{IntoResponse, Json, Response},
        routing::{delete, get, patch, post, put},
        Router,
    };

    pub use serde::{Deserialize, Serialize};

    // Re-export tracing macros and types
    pub use tracing::{debug, error, info, instrument, trace, warn, Level, Span};

    // Re-export tokio for async runtime
    pub use tokio;

    // Re-export time utilities
    pub use chrono::{DateTime, Utc};

    // Re-export UUID
    pub use uuid::Uuid;

    // Re-export futures utilities
    pub use futures::{future, stream, Future, Stream, StreamExt, TryFutureExt, TryStreamExt};

    // Re-export HTTP types
    pub use http::{Method, Uri};
}
