//! # alcs-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API under `/alcs` (create, list, get, delete)
//! - Bind JSON request bodies and path parameters
//! - Map application results into HTTP responses; every failure becomes a
//!   status code plus a `{"message": …}` body
//! - Emit request-level tracing spans around store invocations
//!
//! ## Dependency rule
//! Depends on `alcs-app` (for the port trait and service) and `alcs-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
