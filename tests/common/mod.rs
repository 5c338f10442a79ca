#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use repo_catalog::api::handlers::health_handler;
use repo_catalog::api::routes::repository_routes;
use repo_catalog::state::AppState;
use serde_json::{Value, json};

/// A syntactically valid UUID that is never issued by the tests.
pub const ABSENT_ID: &str = "0b7e8f3a-1c2d-4e5f-8a9b-0c1d2e3f4a5b";

pub fn create_test_state() -> AppState {
    AppState::in_memory()
}

/// Builds a test server over the production route table, without middleware.
pub fn make_server() -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .merge(repository_routes())
        .with_state(create_test_state());

    TestServer::new(app).unwrap()
}

pub async fn create_test_repository(server: &TestServer, title: &str) -> Value {
    let response = server
        .post("/repositories")
        .json(&json!({
            "title": title,
            "url": format!("https://github.com/example/{title}"),
            "techs": ["Node.js", "React"]
        }))
        .await;

    response.assert_status_ok();
    response.json::<Value>()
}

pub async fn list_repositories(server: &TestServer) -> Vec<Value> {
    let response = server.get("/repositories").await;
    response.assert_status_ok();
    response.json::<Vec<Value>>()
}
