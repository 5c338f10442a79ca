//! DTOs for repository endpoints.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use crate::domain::entities::RepositoryFields;

/// Request body for `POST /repositories` and `PUT /repositories/{id}`.
///
/// Absent fields deserialize to empty values. On update every field replaces
/// the stored one, so an omitted field clears it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RepositoryRequest {
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
}

impl RepositoryRequest {
    /// Resolves an extracted body into record fields.
    ///
    /// A request without a JSON body (no `Content-Type: application/json`)
    /// counts as an empty object. Any other rejection is returned as is.
    pub fn into_fields(
        payload: Result<Json<RepositoryRequest>, JsonRejection>,
    ) -> Result<RepositoryFields, JsonRejection> {
        match payload {
            Ok(Json(request)) => Ok(request.into()),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(RepositoryFields::default()),
            Err(rejection) => Err(rejection),
        }
    }
}

impl From<RepositoryRequest> for RepositoryFields {
    fn from(request: RepositoryRequest) -> Self {
        Self {
            title: request.title,
            url: request.url,
            techs: request.techs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_body() {
        let request: RepositoryRequest = serde_json::from_value(json!({
            "title": "axum",
            "url": "https://github.com/tokio-rs/axum",
            "techs": ["rust", "tokio"]
        }))
        .unwrap();

        let fields = RepositoryFields::from(request);
        assert_eq!(fields.title, "axum");
        assert_eq!(fields.techs, vec!["rust", "tokio"]);
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let request: RepositoryRequest = serde_json::from_value(json!({ "title": "only" })).unwrap();

        assert_eq!(request.title, "only");
        assert!(request.url.is_empty());
        assert!(request.techs.is_empty());
    }

    #[test]
    fn test_likes_in_body_is_ignored() {
        let request: RepositoryRequest =
            serde_json::from_value(json!({ "title": "t", "likes": 99 })).unwrap();

        assert_eq!(RepositoryFields::from(request).title, "t");
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_value::<RepositoryRequest>(json!({ "techs": "rust" }));
        assert!(result.is_err());
    }
}
