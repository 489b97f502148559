//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::ConsoleId;

use crate::domain::entities::{Console, HistoryRental, NewHistoryRental};
use crate::error::RentalResult;

/// Console and rental-history repository trait
#[trait_variant::make(RentalRepository: Send)]
pub trait LocalRentalRepository {
    /// All Available consoles, ordered by id
    async fn list_available(&self) -> RentalResult<Vec<Console>>;

    /// Read-only lookup of an Available console
    async fn find_available(&self, console_id: ConsoleId) -> RentalResult<Option<Console>>;

    /// Rent a console atomically
    ///
    /// In one transaction: flip the console to Unavailable only if it is
    /// still Available, then insert the history entry. Returns `None` (and
    /// writes nothing) if another request rented it first.
    async fn rent(&self, rental: &NewHistoryRental) -> RentalResult<Option<HistoryRental>>;
}
