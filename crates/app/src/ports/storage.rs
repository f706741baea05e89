//! Storage port — the repository trait every store backing implements.

use std::future::Future;

use alcs_domain::alcohol::{Alcohol, NewAlcohol};
use alcs_domain::error::AlcsError;
use alcs_domain::id::AlcoholId;

/// Repository for persisting and querying [`Alcohol`]s.
///
/// Implementations must be safe to call concurrently. `create` and `delete`
/// are check-then-act operations and must be atomic with respect to each
/// other: two concurrent creates with the same name never both succeed, and
/// two concurrent deletes of the same id never both return a record.
pub trait AlcoholRepository {
    /// Insert a new record, assigning it a fresh id.
    ///
    /// Fails with [`AlcsError::DuplicateName`] without mutating anything when
    /// a record with the same name already exists.
    fn create(&self, new: NewAlcohol) -> impl Future<Output = Result<Alcohol, AlcsError>> + Send;

    /// Get a record by its identifier.
    fn get_by_id(
        &self,
        id: AlcoholId,
    ) -> impl Future<Output = Result<Option<Alcohol>, AlcsError>> + Send;

    /// Get all records, ordered by ascending id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Alcohol>, AlcsError>> + Send;

    /// Remove a record by its identifier, returning it if it existed.
    fn delete(
        &self,
        id: AlcoholId,
    ) -> impl Future<Output = Result<Option<Alcohol>, AlcsError>> + Send;
}
