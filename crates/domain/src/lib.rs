//! # alcs-domain
//!
//! Pure domain model for the alcs inventory service.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`AlcoholId`](id::AlcoholId) and the error taxonomy
//! - Define the **Alcohol** record (name, optional description, price)
//! - Define **`NewAlcohol`**, the validated input accepted by the store on creation
//! - Contain all invariant enforcement (non-empty name, finite price)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod alcohol;
pub mod error;
pub mod id;
