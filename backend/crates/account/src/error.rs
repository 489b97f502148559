//! Account Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Server-side details stay in the logs;
//! clients only ever see [`AccountError::public_message`].

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type AccountResult<T> = Result<T, AccountError>;

#[derive(Debug, Error)]
pub enum AccountError {
    /// Malformed or missing input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No Authorization header
    #[error("Authorization token is required")]
    MissingToken,

    /// Bad signature, malformed or expired token
    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),

    #[error("Email is already registered")]
    EmailTaken,

    #[error("User not found")]
    UserNotFound,

    /// Welcome email could not be delivered
    #[error("Mailer error: {0}")]
    Mailer(String),

    /// Invoice creation failed at the payment gateway
    #[error("Payment gateway error: {0}")]
    PaymentGateway(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::Validation(_) => ErrorKind::BadRequest,
            AccountError::InvalidCredentials
            | AccountError::MissingToken
            | AccountError::InvalidToken(_) => ErrorKind::Unauthorized,
            AccountError::EmailTaken => ErrorKind::Conflict,
            AccountError::UserNotFound => ErrorKind::NotFound,
            AccountError::Mailer(_)
            | AccountError::PaymentGateway(_)
            | AccountError::Database(_)
            | AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Message safe to return to the client
    pub fn public_message(&self) -> String {
        match self {
            AccountError::Validation(msg) => msg.clone(),
            AccountError::InvalidCredentials => "Invalid email or password".to_string(),
            AccountError::MissingToken => "Authorization token is required".to_string(),
            AccountError::InvalidToken(_) => "Invalid or expired token".to_string(),
            AccountError::EmailTaken => "Email is already registered".to_string(),
            AccountError::UserNotFound => "User not found".to_string(),
            AccountError::Mailer(_) => "Failed to send registration email".to_string(),
            AccountError::PaymentGateway(_) => "Failed to create deposit invoice".to_string(),
            AccountError::Database(_) | AccountError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Mailer(msg) => {
                tracing::error!(message = %msg, "Welcome email delivery failed");
            }
            AccountError::PaymentGateway(msg) => {
                tracing::error!(message = %msg, "Invoice creation failed");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::InvalidToken(reason) => {
                tracing::warn!(reason = %reason, "Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AccountError::Validation(err.message().to_string()),
            _ => AccountError::Internal(match std::error::Error::source(&err) {
                Some(cause) => format!("{err}: {cause}"),
                None => err.to_string(),
            }),
        }
    }
}

impl From<JsonRejection> for AccountError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        AccountError::Validation("Invalid request data".to_string())
    }
}

impl From<platform::token::TokenError> for AccountError {
    fn from(err: platform::token::TokenError) -> Self {
        match err {
            platform::token::TokenError::Expired | platform::token::TokenError::Invalid(_) => {
                AccountError::InvalidToken(err.to_string())
            }
            platform::token::TokenError::WeakSecret | platform::token::TokenError::Signing(_) => {
                AccountError::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_into_response_status_codes() {
        let cases: Vec<(AccountError, StatusCode)> = vec![
            (AccountError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (AccountError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AccountError::MissingToken, StatusCode::UNAUTHORIZED),
            (AccountError::InvalidToken("expired".into()), StatusCode::UNAUTHORIZED),
            (AccountError::EmailTaken, StatusCode::CONFLICT),
            (AccountError::UserNotFound, StatusCode::NOT_FOUND),
            (AccountError::Mailer("smtp down".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AccountError::PaymentGateway("502".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AccountError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_public_message_hides_internal_detail() {
        let err = AccountError::PaymentGateway("xnd_development_secret leaked".into());
        assert!(!err.public_message().contains("xnd_"));

        let err = AccountError::Internal("stack trace".into());
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_bad_request_app_error_becomes_validation() {
        let err: AccountError = AppError::bad_request("Invalid email format").into();
        assert!(matches!(err, AccountError::Validation(ref m) if m == "Invalid email format"));
    }

    #[test]
    fn test_internal_app_error_keeps_cause_for_logs() {
        let err: AccountError = platform::password::HashedPassword::from_phc_string("plaintext")
            .map_err(|e| AppError::internal("Invalid password hash in database").with_source(e))
            .unwrap_err()
            .into();
        assert!(
            matches!(err, AccountError::Internal(ref m) if m.ends_with("Invalid password hash format"))
        );
        assert_eq!(err.public_message(), "Internal server error");
    }
}
