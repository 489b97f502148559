//! Domain Entities
//!
//! Core business entities for the rental domain.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{ConsoleId, HistoryRentalId, UserId};
use rust_decimal::Decimal;

use crate::domain::value_objects::{Availability, RentalPeriod, RentalStatus};

/// Console entity - a rentable physical unit
#[derive(Debug, Clone, PartialEq)]
pub struct Console {
    pub id: ConsoleId,
    pub name: String,
    pub availability: Availability,
    /// Cost per rental day
    pub rental_costs: Decimal,
    pub category: String,
}

impl Console {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

/// HistoryRental entity - immutable record of a completed rental
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRental {
    pub id: HistoryRentalId,
    pub user_id: UserId,
    pub console_id: ConsoleId,
    pub rental_date: NaiveDate,
    pub return_date: NaiveDate,
    pub rental_cost: Decimal,
    pub status: RentalStatus,
    pub created_at: DateTime<Utc>,
}

/// History entry to be written together with the availability flip
#[derive(Debug, Clone, PartialEq)]
pub struct NewHistoryRental {
    pub user_id: UserId,
    pub console_id: ConsoleId,
    pub rental_date: NaiveDate,
    pub return_date: NaiveDate,
    pub rental_cost: Decimal,
    pub status: RentalStatus,
}

impl NewHistoryRental {
    pub fn new(
        user_id: UserId,
        console_id: ConsoleId,
        period: &RentalPeriod,
        rental_cost: Decimal,
    ) -> Self {
        Self {
            user_id,
            console_id,
            rental_date: period.rental_date(),
            return_date: period.return_date(),
            rental_cost,
            status: RentalStatus::Rented,
        }
    }
}
