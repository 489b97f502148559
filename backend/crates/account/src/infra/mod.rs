//! Infrastructure Layer
//!
//! PostgreSQL repository and outbound service clients.

pub mod postgres;
pub mod smtp;
pub mod xendit;
