//! API route configuration.

use crate::api::handlers::{
    create_repository_handler, delete_repository_handler, like_repository_handler,
    list_repositories_handler, update_repository_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Repository catalog routes.
///
/// # Endpoints
///
/// - `GET    /repositories`           - List repositories
/// - `POST   /repositories`           - Create a repository
/// - `PUT    /repositories/{id}`      - Replace title, url and techs
/// - `DELETE /repositories/{id}`      - Delete a repository
/// - `POST   /repositories/{id}/like` - Add one like
pub fn repository_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/repositories",
            get(list_repositories_handler).post(create_repository_handler),
        )
        .route(
            "/repositories/{id}",
            put(update_repository_handler).delete(delete_repository_handler),
        )
        .route("/repositories/{id}/like", post(like_repository_handler))
}
