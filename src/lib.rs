//! # Repo Catalog
//!
//! A small JSON HTTP service for cataloguing code repositories, built with Axum.
//! Records carry a title, a url, a list of tech tags and a like counter, and
//! live in memory for the lifetime of the process.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Repository record, identifiers, storage trait
//! - **Application Layer** ([`application`]) - Catalog operations and id validation
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3333"  # Optional
//! cargo run
//!
//! curl -X POST localhost:3333/repositories \
//!   -H 'Content-Type: application/json' \
//!   -d '{"title":"axum","url":"https://github.com/tokio-rs/axum","techs":["rust"]}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::RepositoryService;
    pub use crate::domain::entities::{Repository, RepositoryFields};
    pub use crate::domain::identifier::RepositoryId;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
