//! Domain→HTTP error mapping.
//!
//! Keep the domain free of transport concerns by translating
//! [`AccountError`] and [`StorageError`] into Actix responses here. Every
//! variant renders as the uniform envelope; nothing escapes the HTTP
//! boundary unwrapped.

use std::collections::BTreeMap;
use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::Value;
use tracing::error;

use crate::domain::{AccountError, StorageError};

use super::envelope::ApiResponse;

/// Error reply rendered as the uniform envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// One or more request fields failed validation; the map holds the
    /// first broken rule per field.
    Validation(BTreeMap<String, String>),
    /// A uniqueness invariant was violated; the message is the whole story.
    Duplicate(String),
    /// Username/password pair did not match a stored record. Deliberately
    /// carries no detail so unknown users and wrong passwords are
    /// indistinguishable.
    InvalidCredentials,
    /// The record store failed; the message includes the underlying cause.
    Internal(String),
}

impl ApiError {
    /// Single-field validation error, used for malformed request bodies.
    pub fn body(message: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("body".to_owned(), message.into());
        Self::Validation(fields)
    }

    fn message(&self) -> &str {
        match self {
            Self::Validation(_) => "Validation failed",
            Self::Duplicate(message) | Self::Internal(message) => message,
            Self::InvalidCredentials => "Invalid username or password",
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Storage(cause) => Self::from(cause),
            duplicate => Self::Duplicate(duplicate.to_string()),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        error!(error = %err, "record store failure");
        Self::Internal(err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Duplicate(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            Self::Validation(fields) => {
                builder.json(ApiResponse::failure_with(self.message(), fields))
            }
            _ => builder.json(ApiResponse::<Value>::failure(self.message())),
        }
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
