//! Domain layer containing the repository record and its storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`identifier`] - Identifier parsing and generation
//! - [`store`] - Storage trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business rules live in [`crate::application::services`].

pub mod entities;
pub mod identifier;
pub mod store;
