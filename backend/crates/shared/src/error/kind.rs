//! Error Kind
//!
//! The closed set of failure classes the rental API can report, each tied
//! to exactly one HTTP status.

use serde::Serialize;

/// エラー分類
///
/// 入力不正・認証失敗・未検出・重複・内部障害のいずれかに集約されます。
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::NotFound.status_code(), 404);
/// assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed body, bad date, bad amount
    BadRequest,
    /// Missing/invalid bearer token, or wrong email/password
    Unauthorized,
    /// User or console does not exist (or the console is already rented)
    NotFound,
    /// Email already registered
    Conflict,
    /// Database, mailer or payment gateway failure
    InternalServerError,
}

impl ErrorKind {
    const fn parts(self) -> (u16, &'static str) {
        match self {
            ErrorKind::BadRequest => (400, "Bad Request"),
            ErrorKind::Unauthorized => (401, "Unauthorized"),
            ErrorKind::NotFound => (404, "Not Found"),
            ErrorKind::Conflict => (409, "Conflict"),
            ErrorKind::InternalServerError => (500, "Internal Server Error"),
        }
    }

    pub const fn status_code(&self) -> u16 {
        self.parts().0
    }

    /// HTTP reason phrase
    pub const fn reason(&self) -> &'static str {
        self.parts().1
    }

    /// 5xx: the client gets a generic message and the detail goes to the log
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_maps_to_one_status() {
        let table = [
            (ErrorKind::BadRequest, 400),
            (ErrorKind::Unauthorized, 401),
            (ErrorKind::NotFound, 404),
            (ErrorKind::Conflict, 409),
            (ErrorKind::InternalServerError, 500),
        ];
        for (kind, status) in table {
            assert_eq!(kind.status_code(), status, "{kind}");
            assert_eq!(kind.is_server_error(), status >= 500);
        }
    }

    #[test]
    fn test_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorKind::InternalServerError).unwrap();
        assert_eq!(json, "\"INTERNAL_SERVER_ERROR\"");
    }
}
