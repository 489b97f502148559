//! Application Error
//!
//! [`AppError`] is what every domain error becomes right before it is
//! written to the wire: a kind (the HTTP status), a client-facing message,
//! an optional hint and an optional cause that only ever reaches the logs.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

type Text = Cow<'static, str>;
type Cause = Box<dyn Error + Send + Sync + 'static>;

/// 統一エラー型
///
/// レスポンスは `{"message": ..., "action": ...}` のみで、`cause` は含まれません。
///
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::bad_request("Invalid rental date format")
///     .with_action("Use YYYY-MM-DD");
/// assert_eq!(err.kind(), ErrorKind::BadRequest);
/// assert_eq!(err.action(), Some("Use YYYY-MM-DD"));
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Text,
    action: Option<Text>,
    cause: Option<Cause>,
}

pub type AppResult<T> = Result<T, AppError>;

macro_rules! shorthand {
    ($($name:ident => $kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($kind), "` error")]
            pub fn $name(message: impl Into<Text>) -> Self {
                Self::new(ErrorKind::$kind, message)
            }
        )*
    };
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Text>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            cause: None,
        }
    }

    shorthand! {
        bad_request => BadRequest,
        internal => InternalServerError,
    }

    /// What the client can do about it
    pub fn with_action(self, action: impl Into<Text>) -> Self {
        Self {
            action: Some(action.into()),
            ..self
        }
    }

    /// Attach the underlying failure (logged, never serialized)
    pub fn with_source<E>(self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            cause: Some(Box::new(cause)),
            ..self
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("cause", &self.cause)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        match &self.action {
            Some(action) => write!(f, " (Action: {action})"),
            None => Ok(()),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}
