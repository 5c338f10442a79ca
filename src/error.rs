//! Application error type and its HTTP mapping.
//!
//! Only two failures exist: a malformed path identifier and an identifier with
//! no matching record. Both are detected synchronously inside the operation and
//! terminate the request immediately.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The path identifier is not a well-formed UUID.
    #[error("Invalid repository id.")]
    InvalidIdentifier,

    /// The identifier is well-formed but no record carries it.
    #[error("Repository not found.")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidIdentifier => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::InvalidIdentifier => "Invalid repository id.",
            AppError::NotFound => "Repository not found.",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidIdentifier.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_display_matches_response_message() {
        assert_eq!(
            AppError::InvalidIdentifier.to_string(),
            AppError::InvalidIdentifier.message()
        );
        assert_eq!(AppError::NotFound.to_string(), AppError::NotFound.message());
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::InvalidIdentifier.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
