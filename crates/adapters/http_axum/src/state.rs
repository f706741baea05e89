//! Shared application state for axum handlers.

use std::sync::Arc;

use alcs_app::ports::AlcoholRepository;
use alcs_app::services::alcohol_service::AlcoholService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Alcohol store service.
    pub alcohol_service: Arc<AlcoholService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            alcohol_service: Arc::clone(&self.alcohol_service),
        }
    }
}

impl<R> AppState<R>
where
    R: AlcoholRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(alcohol_service: AlcoholService<R>) -> Self {
        Self {
            alcohol_service: Arc::new(alcohol_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is shared with something other than the
    /// HTTP layer.
    pub fn from_arc(alcohol_service: Arc<AlcoholService<R>>) -> Self {
        Self { alcohol_service }
    }
}
