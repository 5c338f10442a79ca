//! Process-local implementation of the repository store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Repository, RepositoryFields};
use crate::domain::identifier::RepositoryId;
use crate::domain::store::RepositoryStore;

/// In-memory store backed by an insertion-ordered vector.
///
/// The whole collection sits behind one [`RwLock`]; each trait method takes
/// the lock once, so lookup and mutation happen as a single step. Contents are
/// lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryRepositoryStore {
    repositories: RwLock<Vec<Repository>>,
}

impl InMemoryRepositoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn position_of(repositories: &[Repository], id: RepositoryId) -> Option<usize> {
    repositories.iter().position(|repository| repository.id == id)
}

#[async_trait]
impl RepositoryStore for InMemoryRepositoryStore {
    async fn list(&self) -> Vec<Repository> {
        self.repositories.read().await.clone()
    }

    async fn insert(&self, repository: Repository) {
        debug!(id = %repository.id, "Inserting repository");
        self.repositories.write().await.push(repository);
    }

    async fn update_fields(
        &self,
        id: RepositoryId,
        fields: RepositoryFields,
    ) -> Option<Repository> {
        let mut repositories = self.repositories.write().await;
        let index = position_of(&repositories, id)?;

        let updated = repositories[index].with_fields(fields);
        repositories[index] = updated.clone();
        debug!(%id, "Updated repository fields");

        Some(updated)
    }

    async fn increment_likes(&self, id: RepositoryId) -> Option<Repository> {
        let mut repositories = self.repositories.write().await;
        let index = position_of(&repositories, id)?;

        let updated = repositories[index].liked();
        repositories[index] = updated.clone();
        debug!(%id, likes = updated.likes, "Liked repository");

        Some(updated)
    }

    async fn remove(&self, id: RepositoryId) -> bool {
        let mut repositories = self.repositories.write().await;

        match position_of(&repositories, id) {
            Some(index) => {
                repositories.remove(index);
                debug!(%id, "Removed repository");
                true
            }
            None => false,
        }
    }

    async fn count(&self) -> usize {
        self.repositories.read().await.len()
    }
}
