//! Domain Services
//!
//! Pure rental pricing logic.

use rust_decimal::Decimal;

use crate::domain::value_objects::RentalPeriod;

/// Per-day cost multiplied by the number of whole days
pub fn rental_cost(cost_per_day: Decimal, period: &RentalPeriod) -> Decimal {
    cost_per_day * Decimal::from(period.days())
}
