//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use rust_decimal::Decimal;

use crate::domain::value_object::{email::Email, user_password::UserPassword};

/// Persisted user with prepaid deposit balance
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password: UserPassword,
    /// Prepaid balance, never negative
    pub deposit: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user that has not been inserted yet
///
/// The id and timestamps are assigned by the database.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password: UserPassword,
}

impl NewUser {
    pub fn new(email: Email, password: UserPassword) -> Self {
        Self { email, password }
    }
}
