//! Storage collection abstraction
//!
//! This module provides a uniform async API over a single document
//! collection, using RPITIT (Return Position Impl Trait In Traits),
//! available since Rust 1.75.
//!
//! # Overview
//!
//! - [`Collection`]: the record-access contract (list, create, find, merge-
//!   update, delete — by filter or by opaque identifier string)
//! - [`Filter`]: conjunction of field equality conditions
//! - [`MemoryCollection`]: in-process backend for development and tests
//! - [`mongo::MongoCollection`]: MongoDB backend (feature `mongodb`)
//!
//! Identifiers are opaque strings everywhere above this module. Each backend
//! owns an identifier-filter rule ([`Collection::id_filter`]) which is the
//! only place allowed to know the store's native identifier encoding; it
//! fails with [`StoreErrorKind::InvalidId`] rather than silently matching
//! nothing when an identifier string cannot be decoded.
//!
//! # Example
//!
//! ```rust
//! use resterize::store::{Collection, Document, Filter, MemoryCollection};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), resterize::store::StoreError> {
//! let collection = MemoryCollection::new();
//!
//! let mut fields = Document::new();
//! fields.insert("title".to_string(), json!("first"));
//! let record = collection.create(fields).await?;
//! let id = record["_id"].as_str().unwrap().to_string();
//!
//! let found = collection.find_by_id(&id).await?;
//! assert!(found.is_some());
//! # Ok(())
//! # }
//! ```

mod error;
mod filter;
mod memory;

#[cfg(feature = "mongodb")]
pub mod mongo;

pub use error::{StoreError, StoreErrorKind, StoreOperation, StoreResult};
pub use filter::Filter;
pub use memory::MemoryCollection;

#[cfg(feature = "mongodb")]
pub use mongo::MongoCollection;

use std::future::Future;

/// A stored record in its schemaless form: one JSON object
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Field under which every backend exposes the record identifier
pub const ID_FIELD: &str = "_id";

/// Uniform async access to one document collection
///
/// Backends resolve their underlying handle before construction and are
/// shared immutably; no operation retries on failure, and every failure
/// surfaces to the caller as a [`StoreError`].
///
/// The `*_by_id` operations are provided compositions of [`Collection::id_filter`]
/// with the filter-based operations, mirroring how each backend addresses a
/// single record.
pub trait Collection: Send + Sync {
    /// Build the filter addressing a single record by its identifier string
    ///
    /// # Errors
    ///
    /// Returns [`StoreErrorKind::InvalidId`] when the string cannot be
    /// decoded into the backend's native identifier format.
    fn id_filter(&self, id: &str) -> StoreResult<Filter>;

    /// List all records matching the filter, in stored order
    fn list(&self, filter: Filter) -> impl Future<Output = StoreResult<Vec<Document>>> + Send;

    /// Insert a record, returning it with the store-assigned identifier
    fn create(&self, fields: Document) -> impl Future<Output = StoreResult<Document>> + Send;

    /// Fetch the first record matching the filter
    fn find_one(
        &self,
        filter: Filter,
    ) -> impl Future<Output = StoreResult<Option<Document>>> + Send;

    /// Merge the given fields into the first record matching the filter
    ///
    /// Only the given fields are written; every other field of the record
    /// persists unchanged. Returns the post-update record, or `None` when no
    /// record matched.
    fn update_one(
        &self,
        filter: Filter,
        fields: Document,
    ) -> impl Future<Output = StoreResult<Option<Document>>> + Send;

    /// Delete the first record matching the filter, returning it
    fn delete_one(
        &self,
        filter: Filter,
    ) -> impl Future<Output = StoreResult<Option<Document>>> + Send;

    /// Fetch a record by identifier string
    fn find_by_id(&self, id: &str) -> impl Future<Output = StoreResult<Option<Document>>> + Send {
        async move {
            let filter = self.id_filter(id)?;
            self.find_one(filter).await
        }
    }

    /// Merge-update a record by identifier string
    ///
    /// Same partial-merge contract as [`Collection::update_one`].
    fn update_by_id(
        &self,
        id: &str,
        fields: Document,
    ) -> impl Future<Output = StoreResult<Option<Document>>> + Send {
        async move {
            let filter = self.id_filter(id)?;
            self.update_one(filter, fields).await
        }
    }

    /// Delete a record by identifier string, returning it
    fn delete_by_id(&self, id: &str) -> impl Future<Output = StoreResult<Option<Document>>> + Send {
        async move {
            let filter = self.id_filter(id)?;
            self.delete_one(filter).await
        }
    }
}
