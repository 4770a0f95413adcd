//! Errors that can occur during store operations.

use std::path::PathBuf;

use thiserror::Error;

/// The entity a not-found condition refers to.
///
/// `CartStore::add_product` can fail on either side of the reference, so
/// callers need to tell a missing cart apart from a missing product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Product,
    Cart,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Product => write!(f, "product"),
            Self::Cart => write!(f, "cart"),
        }
    }
}

/// Errors surfaced by the collection store and its specializations.
///
/// The store returns every failure to its immediate caller; it never logs
/// and never retries. `Io` and `Serialization` pass the underlying error
/// through unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller-supplied data failed required-field or type checks.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The identifier does not resolve in the target collection.
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: String },

    /// The backing file holds valid JSON that is not an array of records.
    /// Continuing would risk silent data loss, so this is a hard failure.
    #[error("storage corruption in {path}: {detail}")]
    Corruption { path: PathBuf, detail: String },

    /// Transient I/O failure from the filesystem.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The collection could not be encoded for persistence.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Build a not-found error for `kind` with the offending id.
    #[must_use]
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Whether this error is a not-found condition (of any entity kind).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
