//! Rental Backend Module
//!
//! Console inventory and rental transactions.
//!
//! ## Architecture
//! - `domain/` - Console / HistoryRental entities, rental period, pricing
//! - `application/` - Use cases (list consoles, rent console)
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Rental Flow
//! 1. Look up the console, which must be Available
//! 2. Parse the `YYYY-MM-DD` dates and count whole days (at least one)
//! 3. cost = per-day cost x days
//! 4. In one transaction, flip the console to Unavailable only if it is
//!    still Available, then append the history entry
//!
//! Of two concurrent requests for the same console exactly one succeeds;
//! the other gets 404 and leaves no history row.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use error::{RentalError, RentalResult};
pub use infra::postgres::PgRentalRepository;
pub use presentation::router::{rental_router, rental_router_generic};

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod tests;
