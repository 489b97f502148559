//! Authenticated Principal
//!
//! Identity extracted from a verified bearer token. The auth middleware
//! inserts it into request extensions; protected handlers read it back with
//! `Extension<Principal>`.

use crate::id::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub email: String,
}

impl Principal {
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}
