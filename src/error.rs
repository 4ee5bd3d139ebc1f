//! Error types for AssetHub

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

/// Failure classes surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The backend could not be reached at all
    Transport,
    /// Non-2xx response carrying a backend message
    Backend,
    /// Non-2xx response without a usable message
    BackendGeneric,
    /// Local validation, never sent over the network
    Validation,
    /// Credential missing or rejected
    Unauthorized,
    /// Everything that is our own fault
    Internal,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    #[error("Could not reach the backend: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        /// False when `message` is our generic fallback
        from_backend: bool,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Build an API error from a status and an optional backend message
    pub fn api(status: u16, message: Option<String>) -> Self {
        match message {
            Some(message) => AppError::Api {
                status,
                message,
                from_backend: true,
            },
            None => AppError::Api {
                status,
                message: format!("Request failed with status {}", status),
                from_backend: false,
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Unauthorized(_) => ErrorKind::Unauthorized,
            AppError::Transport(_) => ErrorKind::Transport,
            AppError::Api { from_backend: true, .. }
            | AppError::NotFound(_)
            | AppError::Conflict(_) => ErrorKind::Backend,
            AppError::Api { .. } => ErrorKind::BackendGeneric,
            AppError::Validation(_) | AppError::BadRequest(_) => ErrorKind::Validation,
            AppError::Decode(_)
            | AppError::Config(_)
            | AppError::Io(_)
            | AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }

    /// Text suitable for the dismissible banner
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api { message, .. } => message.clone(),
            AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::Validation(msg)
            | AppError::BadRequest(msg) => msg.clone(),
            AppError::Unauthorized(_) => "Please log in to continue".to_string(),
            AppError::Transport(_) => {
                "Could not reach the backend. Check the connection and try again.".to_string()
            }
            AppError::Decode(_) | AppError::Config(_) | AppError::Io(_) | AppError::Internal(_) => {
                "Something went wrong".to_string()
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Transport(_) => StatusCode::BAD_GATEWAY,
            AppError::Api { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Decode(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Io(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_unauthorized() {
            return Redirect::to("/login").into_response();
        }

        match self.kind() {
            ErrorKind::Internal => tracing::error!("Request failed: {}", self),
            _ => tracing::warn!("Request failed: {}", self),
        }

        let status = self.status_code();
        let body = crate::views::layout::error_page(status, &self.user_message());
        (status, Html(body)).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
