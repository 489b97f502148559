//! Entity Module

pub mod deposit_invoice;
pub mod user;
