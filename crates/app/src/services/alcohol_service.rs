//! Alcohol service — use-cases for managing the inventory.

use alcs_domain::alcohol::{Alcohol, NewAlcohol};
use alcs_domain::error::{AlcsError, EmptyError, NotFoundError};
use alcs_domain::id::AlcoholId;

use crate::ports::AlcoholRepository;

const ENTITY: &str = "Alcohol";

/// Application service implementing the store contract on top of a repository.
pub struct AlcoholService<R> {
    repo: R,
}

impl<R: AlcoholRepository> AlcoholService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new record after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AlcsError::Validation`] if invariants fail,
    /// [`AlcsError::DuplicateName`] if the name is taken, or a storage
    /// error propagated from the repository.
    pub async fn create_alcohol(&self, new: NewAlcohol) -> Result<Alcohol, AlcsError> {
        new.validate()?;
        self.repo.create(new).await
    }

    /// Look up a record by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AlcsError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_alcohol(&self, id: AlcoholId) -> Result<Alcohol, AlcsError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all records in ascending id order.
    ///
    /// An empty store is reported as [`AlcsError::Empty`] rather than as an
    /// empty list; existing clients depend on the 404 this maps to.
    ///
    /// # Errors
    ///
    /// Returns [`AlcsError::Empty`] when there are no records, or a storage
    /// error propagated from the repository.
    pub async fn list_alcohols(&self) -> Result<Vec<Alcohol>, AlcsError> {
        let all = self.repo.get_all().await?;
        if all.is_empty() {
            return Err(EmptyError.into());
        }
        Ok(all)
    }

    /// Delete a record by id, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AlcsError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_alcohol(&self, id: AlcoholId) -> Result<Alcohol, AlcsError> {
        self.repo.delete(id).await?.ok_or_else(|| not_found(id))
    }
}

fn not_found(id: AlcoholId) -> AlcsError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}
