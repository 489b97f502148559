//! Kernel
//!
//! Vocabulary shared by the account and rental crates: the HTTP-facing
//! error type, typed row ids, and the [`principal::Principal`] that the
//! bearer middleware hands to protected handlers.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod principal;
