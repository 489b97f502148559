//! API DTOs (Data Transfer Objects)

use kernel::id::ConsoleId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Console;
use crate::domain::value_objects::Availability;

/// Element of the GET /console response
#[derive(Debug, Clone, Serialize)]
pub struct ConsoleResponse {
    pub id: ConsoleId,
    pub name: String,
    pub availability: Availability,
    /// Cost per day
    pub rentalcosts: Decimal,
    pub category: String,
}

impl From<Console> for ConsoleResponse {
    fn from(console: Console) -> Self {
        Self {
            id: console.id,
            name: console.name,
            availability: console.availability,
            rentalcosts: console.rental_costs,
            category: console.category,
        }
    }
}

/// Request for POST /rent
#[derive(Debug, Clone, Deserialize)]
pub struct RentRequest {
    pub console_id: ConsoleId,
    #[serde(default)]
    pub rental_date: String,
    #[serde(default)]
    pub return_date: String,
}

/// Response for POST /rent
#[derive(Debug, Clone, Serialize)]
pub struct RentResponse {
    pub message: String,
    pub rental_cost: Decimal,
}
