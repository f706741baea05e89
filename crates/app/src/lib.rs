//! # alcs-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `AlcoholRepository` — create, list, get, delete for alcohol records
//! - Define the **driving/inbound** use-case struct:
//!   - `AlcoholService`: the store contract seen by the HTTP layer
//!     (not-found and empty-list semantics, input validation)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `alcs-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
