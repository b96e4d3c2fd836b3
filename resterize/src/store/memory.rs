//! In-process collection backend
//!
//! Backs a [`Collection`] with a `RwLock`-guarded vector of documents. Used
//! by tests and by services running without a configured store.
//!
//! Identifiers are opaque strings: newly created records get a UUIDv4 string
//! under [`ID_FIELD`] unless the caller supplied one, and the identifier
//! filter accepts any string (an unknown identifier is a miss, not an
//! error).

use std::sync::RwLock;

use serde_json::Value;
use uuid::Uuid;

use super::{Collection, Document, Filter, StoreError, StoreOperation, StoreResult, ID_FIELD};

/// In-memory document collection
#[derive(Debug, Default)]
pub struct MemoryCollection {
    records: RwLock<Vec<Document>>,
}

impl MemoryCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, operation: StoreOperation) -> StoreResult<std::sync::RwLockReadGuard<'_, Vec<Document>>> {
        self.records
            .read()
            .map_err(|_| StoreError::backend(operation, "lock poisoned"))
    }

    fn write(&self, operation: StoreOperation) -> StoreResult<std::sync::RwLockWriteGuard<'_, Vec<Document>>> {
        self.records
            .write()
            .map_err(|_| StoreError::backend(operation, "lock poisoned"))
    }
}

impl Collection for MemoryCollection {
    fn id_filter(&self, id: &str) -> StoreResult<Filter> {
        Ok(Filter::eq(ID_FIELD, id))
    }

    async fn list(&self, filter: Filter) -> StoreResult<Vec<Document>> {
        let records = self.read(StoreOperation::List)?;
        Ok(records.iter().filter(|r| filter.matches(r)).cloned().collect())
    }

    async fn create(&self, mut fields: Document) -> StoreResult<Document> {
        if !fields.contains_key(ID_FIELD) {
            fields.insert(
                ID_FIELD.to_string(),
                Value::String(Uuid::new_v4().to_string()),
            );
        }

        let mut records = self.write(StoreOperation::Create)?;
        records.push(fields.clone());

        Ok(fields)
    }

    async fn find_one(&self, filter: Filter) -> StoreResult<Option<Document>> {
        let records = self.read(StoreOperation::FindOne)?;
        Ok(records.iter().find(|r| filter.matches(r)).cloned())
    }

    async fn update_one(&self, filter: Filter, fields: Document) -> StoreResult<Option<Document>> {
        let mut records = self.write(StoreOperation::UpdateOne)?;

        let Some(record) = records.iter_mut().find(|r| filter.matches(r)) else {
            return Ok(None);
        };

        // merge only the given fields; everything else persists unchanged
        for (key, value) in fields {
            record.insert(key, value);
        }

        Ok(Some(record.clone()))
    }

    async fn delete_one(&self, filter: Filter) -> StoreResult<Option<Document>> {
        let mut records = self.write(StoreOperation::DeleteOne)?;

        let Some(index) = records.iter().position(|r| filter.matches(r)) else {
            return Ok(None);
        };

        Ok(Some(records.remove(index)))
    }
}
