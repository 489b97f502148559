//! Domain Value Objects
//!
//! Immutable value types for the rental domain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RentalError;

/// Wire and storage format for rental dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Console availability, stored as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Availability::Available),
            "Unavailable" => Ok(Availability::Unavailable),
            other => Err(RentalError::Internal(format!(
                "Unknown availability in database: {other}"
            ))),
        }
    }
}

/// Status of a history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentalStatus {
    Rented,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Rented => "Rented",
        }
    }
}

impl FromStr for RentalStatus {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rented" => Ok(RentalStatus::Rented),
            other => Err(RentalError::Internal(format!(
                "Unknown rental status in database: {other}"
            ))),
        }
    }
}

/// A validated rental period of at least one whole day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPeriod {
    rental_date: NaiveDate,
    return_date: NaiveDate,
}

impl RentalPeriod {
    /// Parse `YYYY-MM-DD` dates
    ///
    /// The rental date is checked first, so a request with two bad dates
    /// reports the rental date.
    pub fn parse(rental_date: &str, return_date: &str) -> Result<Self, RentalError> {
        let rental_date = NaiveDate::parse_from_str(rental_date.trim(), DATE_FORMAT)
            .map_err(|_| RentalError::InvalidRentalDate)?;
        let return_date = NaiveDate::parse_from_str(return_date.trim(), DATE_FORMAT)
            .map_err(|_| RentalError::InvalidReturnDate)?;

        Self::new(rental_date, return_date)
    }

    pub fn new(rental_date: NaiveDate, return_date: NaiveDate) -> Result<Self, RentalError> {
        if (return_date - rental_date).num_days() < 1 {
            return Err(RentalError::InvalidPeriod);
        }

        Ok(Self {
            rental_date,
            return_date,
        })
    }

    pub fn rental_date(&self) -> NaiveDate {
        self.rental_date
    }

    pub fn return_date(&self) -> NaiveDate {
        self.return_date
    }

    /// Calendar days between the two dates, always >= 1
    pub fn days(&self) -> i64 {
        (self.return_date - self.rental_date).num_days()
    }
}
