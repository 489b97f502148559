//! Domain Layer
//!
//! Contains entities, value objects, repository and collaborator traits.

pub mod entity;
pub mod gateway;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{deposit_invoice::DepositInvoice, user::User};
pub use gateway::{Invoice, InvoiceGateway, InvoiceRequest, WelcomeMailer};
pub use repository::UserRepository;
