//! Account Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and collaborator traits
//! - `application/` - Use cases (register, login, deposit)
//! - `infra/` - PostgreSQL repository, SMTP mailer, Xendit invoice client
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Registration with email + password and a welcome email
//! - Login issuing a 24h HS256 bearer token
//! - Wallet top-up backed by a payment-gateway invoice
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Every login failure is reported as the same 401
//! - Internal error detail is logged, never returned

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::postgres::PgAccountRepository;
pub use infra::smtp::{SmtpConfig, SmtpMailer};
pub use infra::xendit::{XenditConfig, XenditGateway};
pub use presentation::middleware::{BearerAuthState, require_bearer};
pub use presentation::router::{account_router, account_router_generic};

#[cfg(test)]
pub(crate) mod testing;
