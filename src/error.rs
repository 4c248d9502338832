//! Typed errors and HTTP mapping.
//!
//! Page routes render [`AppError`] through the error boundary page; JSON routes wrap it in
//! [`ApiError`] so the same failure becomes an error envelope.

use crate::views;
use axum::{
    extract::rejection::{BytesRejection, FormRejection, JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("config load: {0}")]
    Load(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) | AppError::Db(sqlx::Error::RowNotFound) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
            AppError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
        }
    }

    /// Extractor rejection. A body over the size limit stays a 413; anything else is a 400.
    fn rejected(status: StatusCode, message: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(message)
        } else {
            AppError::BadRequest(message)
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn log(&self) {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
    }
}

macro_rules! from_rejection {
    ($($rejection:ty),*) => {
        $(
            impl From<$rejection> for AppError {
                fn from(r: $rejection) -> Self {
                    AppError::rejected(r.status(), r.body_text())
                }
            }
        )*
    };
}

from_rejection!(BytesRejection, FormRejection, JsonRejection, QueryRejection);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        (status, views::error_page(status)).into_response()
    }
}

/// `{"error": {"code": .., "message": ..}}`
#[derive(Serialize)]
struct Envelope {
    error: Fault,
}

#[derive(Serialize)]
struct Fault {
    code: &'static str,
    message: String,
}

/// [`AppError`] rendered as a JSON error envelope, for the `/api` routes.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        err.log();
        let (status, code) = err.status_and_code();
        // Internal failures are logged above; the client gets the category only.
        let message = if status.is_server_error() {
            status.canonical_reason().unwrap_or("internal error").to_string()
        } else {
            err.to_string()
        };
        (status, Json(Envelope { error: Fault { code, message } })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Validation("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Db(sqlx::Error::RowNotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Db(sqlx::Error::PoolTimedOut).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn oversized_bodies_keep_their_status() {
        assert_eq!(
            AppError::rejected(StatusCode::PAYLOAD_TOO_LARGE, "too big".into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::rejected(StatusCode::UNSUPPORTED_MEDIA_TYPE, "no content type".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn config_error_message_names_the_key() {
        let err = AppError::from(ConfigError::InvalidValue {
            key: "CONTACTS_SEED",
            message: "expected a boolean".into(),
        });
        assert_eq!(err.to_string(), "invalid value for CONTACTS_SEED: expected a boolean");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
