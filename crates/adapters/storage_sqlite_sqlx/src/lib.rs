//! # alcs-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `alcs-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run the embedded migration that creates the `alcs` table
//! - Map between domain types and database rows
//! - Classify constraint violations structurally (never by error text)
//!
//! ## Dependency rule
//! Depends on `alcs-app` (for the port trait) and `alcs-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod alcohol_repo;
pub mod error;
pub mod pool;

pub use alcohol_repo::SqliteAlcoholRepository;
pub use pool::{Config, Database};
