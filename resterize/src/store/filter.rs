//! Filter types for collection queries
//!
//! A [`Filter`] is a conjunction of field equality conditions. The empty
//! filter matches every record.
//!
//! # Example
//!
//! ```rust
//! use resterize::store::Filter;
//!
//! // Match every record
//! let all = Filter::all();
//! assert!(all.is_empty());
//!
//! // Match records where status = "active" and archived = false
//! let filter = Filter::eq("status", "active").and("archived", false);
//! assert_eq!(filter.conditions().len(), 2);
//! ```

use serde_json::Value;

use super::Document;

/// A single field equality condition
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// The field name to compare
    pub field: String,
    /// The value the field must equal
    pub value: Value,
}

/// Conjunction of field equality conditions; empty matches everything
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    /// The match-all filter
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter with a single equality condition
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::default().and(field, value)
    }

    /// Add another equality condition
    #[must_use]
    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Whether this is the match-all filter
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// The conditions, in insertion order
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Whether the document satisfies every condition
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|c| document.get(&c.field) == Some(&c.value))
    }
}
