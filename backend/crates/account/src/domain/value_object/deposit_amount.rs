//! Deposit Amount Value Object
//!
//! A top-up amount in the range `0 < amount <= MAX_DEPOSIT_AMOUNT`,
//! rounded to the two decimal places stored in `users.deposit`.

use kernel::error::app_error::{AppError, AppResult};
use rust_decimal::Decimal;

/// Upper bound for a single top-up
pub const MAX_DEPOSIT_AMOUNT: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

const MONEY_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DepositAmount(Decimal);

impl DepositAmount {
    pub fn new(amount: Decimal) -> AppResult<Self> {
        Self::with_limit(amount, MAX_DEPOSIT_AMOUNT)
    }

    /// Validate against a configured limit instead of the default
    pub fn with_limit(amount: Decimal, max: Decimal) -> AppResult<Self> {
        // before rounding: 100000.001 is over the limit
        if amount > max {
            return Err(AppError::bad_request("Deposit amount exceeds maximum limit")
                .with_action(format!("Maximum deposit is {}", max)));
        }

        let rounded = amount.round_dp(MONEY_SCALE);
        if amount <= Decimal::ZERO || rounded <= Decimal::ZERO {
            return Err(AppError::bad_request("Invalid deposit amount")
                .with_action("Deposit must be greater than zero"));
        }

        Ok(Self(rounded))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for DepositAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
