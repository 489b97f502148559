//! Rental Error Types
//!
//! This module provides rental-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Rental-specific result type alias
pub type RentalResult<T> = Result<T, RentalError>;

#[derive(Debug, Error)]
pub enum RentalError {
    /// Console missing, or no longer Available
    #[error("Console not found or unavailable")]
    ConsoleNotFound,

    #[error("Invalid rental date format")]
    InvalidRentalDate,

    #[error("Invalid return date format")]
    InvalidReturnDate,

    /// Return date not at least one day after rental date
    #[error("Return date must be at least one day after rental date")]
    InvalidPeriod,

    /// Malformed request body
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RentalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RentalError::ConsoleNotFound => ErrorKind::NotFound,
            RentalError::InvalidRentalDate
            | RentalError::InvalidReturnDate
            | RentalError::InvalidPeriod
            | RentalError::Validation(_) => ErrorKind::BadRequest,
            RentalError::Database(_) | RentalError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Message safe to return to the client
    pub fn public_message(&self) -> String {
        match self {
            RentalError::Validation(msg) => msg.clone(),
            RentalError::Database(_) | RentalError::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }

    fn log(&self) {
        match self {
            RentalError::Database(e) => {
                tracing::error!(error = %e, "Rental database error");
            }
            RentalError::Internal(msg) => {
                tracing::error!(message = %msg, "Rental internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Rental error");
            }
        }
    }
}

impl From<RentalError> for AppError {
    fn from(err: RentalError) -> Self {
        AppError::new(err.kind(), err.public_message())
    }
}

impl IntoResponse for RentalError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<JsonRejection> for RentalError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        RentalError::Validation("Invalid request data".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(RentalError::ConsoleNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(RentalError::InvalidRentalDate.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RentalError::InvalidReturnDate.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RentalError::InvalidPeriod.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RentalError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let err = RentalError::Internal("relation \"history_rentals\" does not exist".into());
        assert_eq!(err.public_message(), "Internal server error");
        assert_eq!(
            RentalError::ConsoleNotFound.public_message(),
            "Console not found or unavailable"
        );
    }
}
