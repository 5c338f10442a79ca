//! Handlers for repository catalog endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::repository::RepositoryRequest;
use crate::domain::entities::Repository;
use crate::domain::identifier::RepositoryId;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all repositories in insertion order.
///
/// # Endpoint
///
/// `GET /repositories`
pub async fn list_repositories_handler(State(state): State<AppState>) -> Json<Vec<Repository>> {
    Json(state.repository_service.list().await)
}

/// Creates a repository.
///
/// # Endpoint
///
/// `POST /repositories`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "axum",
///   "url": "https://github.com/tokio-rs/axum",
///   "techs": ["rust", "tokio"]
/// }
/// ```
///
/// Missing fields, or a missing body, are stored empty. The response is the
/// created record with its generated `id` and `likes: 0`.
///
/// # Errors
///
/// Returns the JSON extractor's rejection if the body is not valid JSON or a
/// field has the wrong type.
pub async fn create_repository_handler(
    State(state): State<AppState>,
    payload: Result<Json<RepositoryRequest>, JsonRejection>,
) -> Result<Json<Repository>, JsonRejection> {
    let fields = RepositoryRequest::into_fields(payload)?;

    Ok(Json(state.repository_service.create(fields).await))
}

/// Replaces title, url and techs of a repository.
///
/// # Endpoint
///
/// `PUT /repositories/{id}`
///
/// `id` and `likes` are kept. Any field missing from the body is cleared.
/// The id is checked before the body is looked at.
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not a valid UUID, whatever the body.
/// Returns the JSON extractor's rejection if the body is malformed.
/// Returns 404 Not Found if the repository doesn't exist.
pub async fn update_repository_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<RepositoryRequest>, JsonRejection>,
) -> Result<Json<Repository>, Response> {
    RepositoryId::parse(&id).map_err(IntoResponse::into_response)?;

    let fields = RepositoryRequest::into_fields(payload).map_err(IntoResponse::into_response)?;

    let repository = state
        .repository_service
        .update(&id, fields)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(Json(repository))
}

/// Deletes a repository permanently.
///
/// # Endpoint
///
/// `DELETE /repositories/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not a valid UUID.
/// Returns 404 Not Found if the repository doesn't exist.
pub async fn delete_repository_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.repository_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Adds one like to a repository.
///
/// # Endpoint
///
/// `POST /repositories/{id}/like`
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not a valid UUID.
/// Returns 404 Not Found if the repository doesn't exist.
pub async fn like_repository_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Repository>, AppError> {
    let repository = state.repository_service.like(&id).await?;

    Ok(Json(repository))
}
