use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Remote(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Remote(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Http(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            AppError::Deserialization(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::EnvError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    }

    /// Message shown to the user in a toast.
    pub fn user_message(&self) -> String {
        self.to_response().1
    }
}
