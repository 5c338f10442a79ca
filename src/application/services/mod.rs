//! Business logic services for the application layer.

pub mod repository_service;

pub use repository_service::RepositoryService;
