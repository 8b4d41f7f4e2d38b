use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failure taxonomy: rejected input is user-correctable and shown inline;
/// a storage failure is fatal to the triggering operation only.
#[derive(Debug)]
pub enum AppError {
    Invalid(String),
    Storage(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Invalid(message) | AppError::Storage(message) => message,
        };
        (status, message).into_response()
    }
}
