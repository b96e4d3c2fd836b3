//! Store error types
//!
//! Structured errors for collection operations, with operation context for
//! meaningful log lines.
//!
//! # Example
//!
//! ```rust
//! use resterize::store::{StoreError, StoreErrorKind};
//!
//! let error = StoreError::invalid_id("not-an-object-id");
//! assert!(matches!(error.kind, StoreErrorKind::InvalidId));
//! ```

use std::fmt;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Operation being performed when the store error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// Establishing the store connection
    Connect,
    /// Listing records with a filter
    List,
    /// Inserting a record
    Create,
    /// Fetching a single record
    FindOne,
    /// Merge-updating a single record
    UpdateOne,
    /// Deleting a single record
    DeleteOne,
    /// Building an identifier filter
    IdFilter,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "connect"),
            Self::List => write!(f, "list"),
            Self::Create => write!(f, "create"),
            Self::FindOne => write!(f, "find_one"),
            Self::UpdateOne => write!(f, "update_one"),
            Self::DeleteOne => write!(f, "delete_one"),
            Self::IdFilter => write!(f, "id_filter"),
        }
    }
}

/// Category of store error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreErrorKind {
    /// Identifier string cannot be decoded into the native identifier format
    InvalidId,
    /// Failed to reach or authenticate with the backend
    ConnectionFailed,
    /// Record could not be converted to or from the backend representation
    Serialization,
    /// Underlying backend error
    Backend,
}

impl fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "invalid_id"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Serialization => write!(f, "serialization"),
            Self::Backend => write!(f, "backend"),
        }
    }
}

/// Structured store error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// The operation being performed when the error occurred
    pub operation: StoreOperation,
    /// The category of error
    pub kind: StoreErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Additional context (e.g. the offending identifier)
    pub context: Option<String>,
}

impl StoreError {
    /// Create a new store error
    pub fn new(
        operation: StoreOperation,
        kind: StoreErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Create an invalid-identifier error for the given identifier string
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self {
            operation: StoreOperation::IdFilter,
            kind: StoreErrorKind::InvalidId,
            message: "identifier cannot be decoded into the native format".to_string(),
            context: Some(id.into()),
        }
    }

    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::new(
            StoreOperation::Connect,
            StoreErrorKind::ConnectionFailed,
            message,
        )
    }

    /// Create a serialization error
    pub fn serialization(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self::new(operation, StoreErrorKind::Serialization, message)
    }

    /// Create a backend error
    pub fn backend(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self::new(operation, StoreErrorKind::Backend, message)
    }

    /// Add context to an existing error
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set the operation that caused the error
    #[must_use]
    pub fn with_operation(mut self, operation: StoreOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Check if this error is retriable (transient errors that may succeed on retry)
    pub fn is_retriable(&self) -> bool {
        matches!(self.kind, StoreErrorKind::ConnectionFailed)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "store {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(ref context) = self.context {
            write!(f, " [{}]", context)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {}
