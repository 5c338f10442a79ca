//! Repository catalog service.

use crate::domain::entities::{Repository, RepositoryFields};
use crate::domain::identifier::{IdGenerator, RepositoryId, UuidV4Generator};
use crate::domain::store::RepositoryStore;
use crate::error::AppError;
use std::sync::Arc;

/// Service implementing the catalog operations.
///
/// Operations that receive an identifier from the caller validate its format
/// first and fail with [`AppError::InvalidIdentifier`] before any lookup is
/// attempted. A well-formed identifier with no matching record fails with
/// [`AppError::NotFound`] and leaves the collection untouched.
pub struct RepositoryService<S: RepositoryStore> {
    store: Arc<S>,
    id_generator: Arc<dyn IdGenerator>,
}

impl<S: RepositoryStore> RepositoryService<S> {
    /// Creates a service that issues random v4 identifiers.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_id_generator(store, Arc::new(UuidV4Generator))
    }

    /// Creates a service with a custom identifier source.
    pub fn with_id_generator(store: Arc<S>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            id_generator,
        }
    }

    /// Lists every repository in insertion order.
    pub async fn list(&self) -> Vec<Repository> {
        self.store.list().await
    }

    /// Number of repositories currently stored.
    pub async fn count(&self) -> usize {
        self.store.count().await
    }

    /// Creates a repository with a fresh identifier and zero likes.
    ///
    /// Fields are stored as given; there is no validation.
    pub async fn create(&self, fields: RepositoryFields) -> Repository {
        let repository = Repository::new(self.id_generator.generate(), fields);
        self.store.insert(repository.clone()).await;

        tracing::info!(id = %repository.id, "Repository created");
        repository
    }

    /// Replaces title, url and techs of an existing repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdentifier`] if `id` is malformed.
    /// Returns [`AppError::NotFound`] if no repository has that id.
    pub async fn update(
        &self,
        id: &str,
        fields: RepositoryFields,
    ) -> Result<Repository, AppError> {
        let id = RepositoryId::parse(id)?;

        self.store
            .update_fields(id, fields)
            .await
            .ok_or(AppError::NotFound)
    }

    /// Deletes a repository permanently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdentifier`] if `id` is malformed.
    /// Returns [`AppError::NotFound`] if no repository has that id.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = RepositoryId::parse(id)?;

        if !self.store.remove(id).await {
            return Err(AppError::NotFound);
        }

        tracing::info!(%id, "Repository deleted");
        Ok(())
    }

    /// Adds one like to a repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdentifier`] if `id` is malformed.
    /// Returns [`AppError::NotFound`] if no repository has that id.
    pub async fn like(&self, id: &str) -> Result<Repository, AppError> {
        let id = RepositoryId::parse(id)?;

        self.store
            .increment_likes(id)
            .await
            .ok_or(AppError::NotFound)
    }
}
