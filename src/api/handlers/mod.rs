//! HTTP request handlers for API endpoints.

pub mod health;
pub mod repositories;

pub use health::health_handler;
pub use repositories::{
    create_repository_handler, delete_repository_handler, like_repository_handler,
    list_repositories_handler, update_repository_handler,
};
