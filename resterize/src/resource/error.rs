//! Resource error type and HTTP mapping
//!
//! Every handler failure funnels through [`ResourceError`], whose
//! `IntoResponse` impl is the single place request errors become HTTP
//! responses:
//!
//! - validation failures render as 400 with the structured error list,
//! - missing records render as 404 with an empty body,
//! - everything else is logged with full detail and rendered as an opaque
//!   500 with no body, so internals never reach a client.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::store::StoreError;

use super::entity::FieldError;

/// A request-scoped resource failure
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceError {
    /// The write payload violated entity constraints
    Validation(Vec<FieldError>),
    /// No record matched the addressed identifier
    NotFound {
        /// Entity name for log context
        entity: &'static str,
        /// The identifier that missed
        id: String,
    },
    /// The storage layer failed
    Store(StoreError),
}

impl ResourceError {
    /// Create a not-found error with entity context
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "validation failed with {} error(s)", errors.len())
            }
            Self::NotFound { entity, id } => write!(f, "{} not found [{}]", entity, id),
            Self::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ResourceError {}

impl From<StoreError> for ResourceError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Response body for validation failures
#[derive(Debug, Serialize)]
struct ValidationBody {
    errors: Vec<FieldError>,
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                tracing::debug!(count = errors.len(), "request failed validation");
                (StatusCode::BAD_REQUEST, Json(ValidationBody { errors })).into_response()
            }
            Self::NotFound { entity, id } => {
                tracing::debug!(entity, id = %id, "record not found");
                StatusCode::NOT_FOUND.into_response()
            }
            Self::Store(err) => {
                // full detail stays in the logs; the client sees nothing
                tracing::error!(
                    operation = %err.operation,
                    kind = %err.kind,
                    context = ?err.context,
                    "storage failure: {}", err.message
                );
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
