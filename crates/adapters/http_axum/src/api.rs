//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod alcohols;

use axum::Router;
use axum::routing::get;

use alcs_app::ports::AlcoholRepository;

use crate::state::AppState;

/// Build the `/alcs` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: AlcoholRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/alcs",
            get(alcohols::list::<R>).post(alcohols::create::<R>),
        )
        .route(
            "/alcs/{id}",
            get(alcohols::get::<R>).delete(alcohols::delete::<R>),
        )
}
