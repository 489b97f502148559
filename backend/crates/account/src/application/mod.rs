//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod deposit;
pub mod login;
pub mod register;

// Re-exports
pub use config::AccountConfig;
pub use deposit::{DepositInput, DepositOutput, DepositUseCase};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
