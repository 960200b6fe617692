use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::error;

use crate::models::common::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("An {entity} with this email already exists")]
    Duplicate { entity: &'static str },

    #[error("User already exists")]
    UserExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("{0}")]
    InvalidQuery(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::Duplicate { .. }
            | ApiError::UserExists
            | ApiError::MalformedPayload(_)
            | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a failed insert, so a unique-key race reports the same error as the
    /// duplicate pre-check would have.
    pub fn from_insert(err: DbErr, duplicate: ApiError) -> ApiError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => duplicate,
            _ => ApiError::Database(err),
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Validation(details) => ErrorResponse {
                error: self.to_string(),
                details: Some(details.clone()),
                message: None,
            },
            ApiError::Duplicate { .. } => ErrorResponse {
                error: "Email already registered".to_string(),
                details: None,
                message: Some(self.to_string()),
            },
            ApiError::MalformedPayload(reason) => ErrorResponse {
                error: "Malformed payload".to_string(),
                details: Some(vec![reason.clone()]),
                message: None,
            },
            // Store and runtime details stay in the logs
            ApiError::Database(_) | ApiError::Internal(_) => ErrorResponse::new("Server error"),
            _ => ErrorResponse::new(self.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        (status, Json(self.body())).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedPayload(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::Internal(format!("bcrypt failed: {err}"))
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("blocking task failed: {err}"))
    }
}
