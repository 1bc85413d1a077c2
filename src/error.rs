use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AdminError {
    #[error("Invalid admin password")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("User not found")]
    NotFound,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminError {
    pub fn validation(message: impl Into<String>) -> Self {
        AdminError::Validation(message.into())
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            AdminError::Unauthorized => StatusCode::FORBIDDEN,
            AdminError::Validation(_) => StatusCode::BAD_REQUEST,
            AdminError::NotFound => StatusCode::NOT_FOUND,
            AdminError::Config(_) | AdminError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

pub fn internal_error<E: std::fmt::Display>(error: E) -> AdminError {
    AdminError::Internal(error.to_string())
}
