//! Router assembly

use std::sync::Arc;

use axum::{routing::get, Router};

use resterize::health::health;
use resterize::resource::{self, Clock};
use resterize::store::Collection;

use crate::idea::IdeaConfig;

/// Name of the backing collection for ideas
pub const IDEAS_COLLECTION: &str = "ideas";

/// Build the application router over the given collection
pub fn app<C>(collection: C, clock: Arc<dyn Clock>) -> Router
where
    C: Collection + 'static,
{
    Router::new()
        .route("/health", get(health))
        .nest("/ideas", resource::router(collection, IdeaConfig::new(clock)))
}
