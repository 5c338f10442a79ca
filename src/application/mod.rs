//! Application layer services implementing business logic.
//!
//! Services consume the domain storage trait and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::repository_service::RepositoryService`] - Repository catalog
//!   operations and identifier validation

pub mod services;
