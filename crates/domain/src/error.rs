//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`AlcsError`]
//! via `#[from]`; the HTTP adapter is the only place where these become
//! status codes.

/// Top-level error returned by every store operation.
#[derive(Debug, thiserror::Error)]
pub enum AlcsError {
    /// Input rejected before reaching storage.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// No record with the requested identifier.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// A record with the same name already exists.
    #[error("duplicate name")]
    DuplicateName(#[from] DuplicateNameError),

    /// The store holds no records.
    #[error("empty store")]
    Empty(#[from] EmptyError),

    /// The backing storage failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("price must be a finite number, got {0}")]
    NonFinitePrice(f64),

    /// The request body could not be bound to the expected shape.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// Lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Creation rejected by the unique-name invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} named {name:?} already exists")]
pub struct DuplicateNameError {
    pub entity: &'static str,
    pub name: String,
}

/// Listing an empty collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("empty list")]
pub struct EmptyError;
