//! Repository entity: one catalogued code repository.

use crate::domain::identifier::RepositoryId;
use serde::Serialize;

/// A catalogued repository with its like counter.
///
/// `id` is assigned at creation and never changes. `likes` starts at zero and
/// only grows, one step per successful like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub id: RepositoryId,
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
    pub likes: u64,
}

impl Repository {
    /// Builds a fresh record with zero likes.
    pub fn new(id: RepositoryId, fields: RepositoryFields) -> Self {
        Self {
            id,
            title: fields.title,
            url: fields.url,
            techs: fields.techs,
            likes: 0,
        }
    }

    /// Returns a copy with every caller-editable field replaced.
    ///
    /// Replacement is unconditional: an empty field in `fields` overwrites the
    /// current value. `id` and `likes` carry over.
    pub fn with_fields(&self, fields: RepositoryFields) -> Self {
        Self {
            id: self.id,
            title: fields.title,
            url: fields.url,
            techs: fields.techs,
            likes: self.likes,
        }
    }

    /// Returns a copy with `likes` incremented by one.
    pub fn liked(&self) -> Self {
        Self {
            likes: self.likes.saturating_add(1),
            ..self.clone()
        }
    }
}

/// Caller-editable fields, used both for creation and full replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryFields {
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identifier::{IdGenerator, UuidV4Generator};

    fn fields(title: &str, url: &str, techs: &[&str]) -> RepositoryFields {
        RepositoryFields {
            title: title.to_string(),
            url: url.to_string(),
            techs: techs.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_new_repository_has_zero_likes() {
        let id = UuidV4Generator.generate();
        let repo = Repository::new(
            id,
            fields("axum", "https://github.com/tokio-rs/axum", &["rust"]),
        );

        assert_eq!(repo.id, id);
        assert_eq!(repo.title, "axum");
        assert_eq!(repo.url, "https://github.com/tokio-rs/axum");
        assert_eq!(repo.techs, vec!["rust"]);
        assert_eq!(repo.likes, 0);
    }

    #[test]
    fn test_with_fields_keeps_identity_and_likes() {
        let id = UuidV4Generator.generate();
        let repo = Repository::new(id, fields("old", "https://old.dev", &["a", "b"]))
            .liked()
            .liked();

        let updated = repo.with_fields(fields("new", "https://new.dev", &[]));

        assert_eq!(updated.id, id);
        assert_eq!(updated.likes, 2);
        assert_eq!(updated.title, "new");
        assert_eq!(updated.url, "https://new.dev");
        assert!(updated.techs.is_empty());
    }

    #[test]
    fn test_liked_only_touches_likes() {
        let repo = Repository::new(
            UuidV4Generator.generate(),
            fields("tokio", "https://tokio.rs", &["rust", "async"]),
        );

        let liked = repo.liked();

        assert_eq!(liked.likes, 1);
        assert_eq!(liked.id, repo.id);
        assert_eq!(liked.title, repo.title);
        assert_eq!(liked.url, repo.url);
        assert_eq!(liked.techs, repo.techs);
    }

    #[test]
    fn test_serialized_shape() {
        let repo = Repository::new(
            UuidV4Generator.generate(),
            fields("serde", "https://serde.rs", &["rust"]),
        );

        let json = serde_json::to_value(&repo).unwrap();

        assert_eq!(json["id"], repo.id.to_string());
        assert_eq!(json["title"], "serde");
        assert_eq!(json["url"], "https://serde.rs");
        assert_eq!(json["techs"], serde_json::json!(["rust"]));
        assert_eq!(json["likes"], 0);
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
