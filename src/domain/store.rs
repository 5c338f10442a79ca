//! Storage trait for repository records.

use crate::domain::entities::{Repository, RepositoryFields};
use crate::domain::identifier::RepositoryId;
use async_trait::async_trait;

/// Owner of the ordered repository collection.
///
/// Every method is atomic with respect to the others: an implementation holds
/// one guard for the whole lookup-and-mutate step, so concurrent requests never
/// observe a half-applied change. Records keep their insertion position across
/// updates and likes.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryRepositoryStore`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    /// Returns every record in insertion order.
    async fn list(&self) -> Vec<Repository>;

    /// Appends a record to the end of the collection.
    async fn insert(&self, repository: Repository);

    /// Replaces the editable fields of the record with `id` in place.
    ///
    /// Returns the updated record, or `None` if no record has that id.
    async fn update_fields(
        &self,
        id: RepositoryId,
        fields: RepositoryFields,
    ) -> Option<Repository>;

    /// Increments the like counter of the record with `id` by one.
    ///
    /// Returns the updated record, or `None` if no record has that id.
    async fn increment_likes(&self, id: RepositoryId) -> Option<Repository>;

    /// Removes the record with `id`.
    ///
    /// Returns `true` if a record was removed.
    async fn remove(&self, id: RepositoryId) -> bool;

    /// Number of records currently stored.
    async fn count(&self) -> usize;
}
