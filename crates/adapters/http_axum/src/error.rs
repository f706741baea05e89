//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use alcs_domain::error::AlcsError;

/// JSON body carrying a human-readable message.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Maps [`AlcsError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(AlcsError);

impl From<AlcsError> for ApiError {
    fn from(err: AlcsError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            AlcsError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AlcsError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            AlcsError::Empty(err) => (StatusCode::NOT_FOUND, err.to_string()),
            AlcsError::DuplicateName(err) => (StatusCode::CONFLICT, err.to_string()),
            AlcsError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_client_error() {
            tracing::debug!(%status, %message, "request rejected");
        }
        (status, Json(MessageBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alcs_domain::error::{DuplicateNameError, EmptyError, NotFoundError, ValidationError};

    fn status_of(err: impl Into<AlcsError>) -> StatusCode {
        ApiError::from(err.into()).into_response().status()
    }

    #[test]
    fn should_map_validation_to_bad_request() {
        assert_eq!(status_of(ValidationError::EmptyName), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_and_empty_to_not_found() {
        let not_found = NotFoundError {
            entity: "Alcohol",
            id: "1".to_string(),
        };
        assert_eq!(status_of(not_found), StatusCode::NOT_FOUND);
        assert_eq!(status_of(EmptyError), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_duplicate_name_to_conflict() {
        let dup = DuplicateNameError {
            entity: "Alcohol",
            name: "Gin".to_string(),
        };
        assert_eq!(status_of(dup), StatusCode::CONFLICT);
    }

    #[test]
    fn should_hide_storage_details() {
        let err = AlcsError::Storage(Box::new(std::io::Error::other("password=hunter2")));
        let (status, message) = ApiError::from(err).status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "internal server error");
    }
}
