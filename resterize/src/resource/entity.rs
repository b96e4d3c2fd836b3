//! Entity configuration contract
//!
//! An [`EntityConfig`] is the per-entity bundle the resource handlers are
//! instantiated with: how a write payload is validated, which exact fields
//! get persisted, and how a stored record is projected for clients. One
//! handler factory, one implementation per entity type.
//!
//! # Example
//!
//! ```rust
//! use resterize::resource::{EntityConfig, FieldError};
//! use resterize::store::Document;
//! use serde::{Deserialize, Serialize};
//! use serde_json::Value;
//!
//! #[derive(Deserialize)]
//! struct TagDraft {
//!     label: Option<String>,
//! }
//!
//! #[derive(Serialize)]
//! struct Tag {
//!     id: Option<String>,
//!     label: Option<String>,
//! }
//!
//! struct TagConfig;
//!
//! impl EntityConfig for TagConfig {
//!     type Input = TagDraft;
//!     type Public = Tag;
//!
//!     fn name(&self) -> &'static str {
//!         "tag"
//!     }
//!
//!     fn validate(&self, input: &TagDraft, _creating: bool) -> Vec<FieldError> {
//!         match &input.label {
//!             Some(label) if label.chars().count() > 32 => {
//!                 vec![FieldError::too_long("label", 32)]
//!             }
//!             _ => vec![],
//!         }
//!     }
//!
//!     fn prepare(&self, input: TagDraft, _creating: bool) -> Document {
//!         let mut fields = Document::new();
//!         if let Some(label) = input.label {
//!             fields.insert("label".to_string(), Value::String(label));
//!         }
//!         fields
//!     }
//!
//!     fn publicize(&self, record: Document) -> Tag {
//!         Tag {
//!             id: record.get("_id").and_then(Value::as_str).map(str::to_owned),
//!             label: record.get("label").and_then(Value::as_str).map(str::to_owned),
//!         }
//!     }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::store::Document;

/// Time source injected into entity configurations
///
/// Keeps preparers free of hidden global state; tests substitute a fixed
/// clock.
pub trait Clock: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Constraint code (e.g. "MAX_LENGTH")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl FieldError {
    /// Create a field error
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a maximum-length violation for the given field
    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        let field = field.into();
        let message = format!("must be at most {} characters", max);
        Self::new(field, "MAX_LENGTH", message)
    }
}

/// Per-entity configuration driving the generic CRUD handlers
///
/// Implementations must be stateless across calls: `validate` returns its
/// result directly and never accumulates anything between invocations, so a
/// single configuration value is safe to share across concurrent requests.
pub trait EntityConfig: Send + Sync + 'static {
    /// Candidate write payload accepted by create and update
    type Input: DeserializeOwned + Send + 'static;

    /// Client-facing projection of a stored record
    type Public: Serialize + Send + 'static;

    /// Entity name used in logs and error context
    fn name(&self) -> &'static str;

    /// Check structural and semantic constraints against a proposed payload
    ///
    /// Returns an empty vector when valid. Must not mutate its input and
    /// must be idempotent.
    fn validate(&self, input: &Self::Input, creating: bool) -> Vec<FieldError>;

    /// Derive the exact field set to persist
    ///
    /// On create, stamps both the creation and modification timestamps (same
    /// instant) alongside the whitelisted writable fields. On update, stamps
    /// only a new modification timestamp — the creation timestamp is left
    /// out so the store's partial merge preserves it.
    fn prepare(&self, input: Self::Input, creating: bool) -> Document;

    /// Project a stored record into its public view
    ///
    /// Strips internal fields and renames the internal identifier to the
    /// public identifier field. Fields absent from the record stay absent
    /// from the view.
    fn publicize(&self, record: Document) -> Self::Public;
}
