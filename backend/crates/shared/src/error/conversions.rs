//! Database error inspection and the JSON error response.

use super::app_error::AppError;

/// SQLSTATE 23505
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::{Json, http::StatusCode};

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match self.action() {
            Some(action) => serde_json::json!({ "message": self.message(), "action": action }),
            None => serde_json::json!({ "message": self.message() }),
        };

        (status, Json(body)).into_response()
    }
}
