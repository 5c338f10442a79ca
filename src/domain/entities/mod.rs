//! Core domain entities.
//!
//! - [`Repository`] - A catalogued repository record
//! - [`RepositoryFields`] - The caller-editable part of a record, used for
//!   creation and full replacement

pub mod repository;

pub use repository::{Repository, RepositoryFields};
