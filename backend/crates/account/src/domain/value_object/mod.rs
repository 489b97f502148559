//! Value Object Module

pub mod deposit_amount;
pub mod email;
pub mod user_password;
