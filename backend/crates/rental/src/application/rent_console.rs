//! Rent Console Use Case

use crate::domain::entities::{HistoryRental, NewHistoryRental};
use crate::domain::repository::RentalRepository;
use crate::domain::services::rental_cost;
use crate::domain::value_objects::RentalPeriod;
use crate::error::{RentalError, RentalResult};
use kernel::id::{ConsoleId, UserId};
use std::sync::Arc;

/// Input DTO for rent console
#[derive(Debug, Clone)]
pub struct RentConsoleInput {
    pub user_id: UserId,
    pub console_id: ConsoleId,
    /// `YYYY-MM-DD`
    pub rental_date: String,
    /// `YYYY-MM-DD`
    pub return_date: String,
}

/// Rent Console Use Case
pub struct RentConsoleUseCase<R>
where
    R: RentalRepository,
{
    repo: Arc<R>,
}

impl<R> RentConsoleUseCase<R>
where
    R: RentalRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Unknown or rented consoles are reported before date errors.
    pub async fn execute(&self, input: RentConsoleInput) -> RentalResult<HistoryRental> {
        let console = self
            .repo
            .find_available(input.console_id)
            .await?
            .ok_or(RentalError::ConsoleNotFound)?;

        let period = RentalPeriod::parse(&input.rental_date, &input.return_date)?;
        let cost = rental_cost(console.rental_costs, &period);

        // 条件付き UPDATE で二重貸出を防ぐ
        let rental = self
            .repo
            .rent(&NewHistoryRental::new(input.user_id, console.id, &period, cost))
            .await?
            .ok_or_else(|| {
                tracing::info!(
                    console_id = %console.id,
                    user_id = %input.user_id,
                    "Console was rented by a concurrent request"
                );
                RentalError::ConsoleNotFound
            })?;

        tracing::info!(
            rental_id = %rental.id,
            console_id = %rental.console_id,
            user_id = %rental.user_id,
            days = period.days(),
            rental_cost = %rental.rental_cost,
            "Console rented"
        );

        Ok(rental)
    }
}
