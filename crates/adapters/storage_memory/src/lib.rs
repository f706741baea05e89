//! # alcs-adapter-storage-memory
//!
//! Process-local implementation of [`AlcoholRepository`].
//!
//! All records live behind a single [`RwLock`]. Mutations hold the write lock
//! across the whole check-then-act sequence, so the duplicate-name check and
//! the insert (or the lookup and the removal) are one atomic step. Reads share
//! the lock and never observe a half-applied mutation.
//!
//! Ids come from a counter that only moves forward; a deleted id is never
//! handed out again for the lifetime of the repository.
//!
//! ## Dependency rule
//! Depends on `alcs-app` (for the port trait) and `alcs-domain` (for domain types).

use std::collections::BTreeMap;
use std::future::Future;

use tokio::sync::RwLock;

use alcs_app::ports::AlcoholRepository;
use alcs_domain::alcohol::{Alcohol, NewAlcohol};
use alcs_domain::error::{AlcsError, DuplicateNameError};
use alcs_domain::id::AlcoholId;

#[derive(Debug)]
struct Inner {
    last_id: AlcoholId,
    records: BTreeMap<AlcoholId, Alcohol>,
}

/// In-memory alcohol repository.
#[derive(Debug)]
pub struct InMemoryAlcoholRepository {
    inner: RwLock<Inner>,
}

impl Default for InMemoryAlcoholRepository {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                last_id: AlcoholId::new(0),
                records: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryAlcoholRepository {
    /// Create an empty repository. The first assigned id is `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AlcoholRepository for InMemoryAlcoholRepository {
    fn create(&self, new: NewAlcohol) -> impl Future<Output = Result<Alcohol, AlcsError>> + Send {
        async move {
            let mut inner = self.inner.write().await;
            if inner.records.values().any(|existing| existing.name == new.name) {
                return Err(DuplicateNameError {
                    entity: "Alcohol",
                    name: new.name,
                }
                .into());
            }

            let id = inner.last_id.next();
            inner.last_id = id;
            let alcohol = Alcohol::from_new(id, new);
            inner.records.insert(id, alcohol.clone());
            Ok(alcohol)
        }
    }

    fn get_by_id(
        &self,
        id: AlcoholId,
    ) -> impl Future<Output = Result<Option<Alcohol>, AlcsError>> + Send {
        async move { Ok(self.inner.read().await.records.get(&id).cloned()) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Alcohol>, AlcsError>> + Send {
        async move { Ok(self.inner.read().await.records.values().cloned().collect()) }
    }

    fn delete(
        &self,
        id: AlcoholId,
    ) -> impl Future<Output = Result<Option<Alcohol>, AlcsError>> + Send {
        async move { Ok(self.inner.write().await.records.remove(&id)) }
    }
}
