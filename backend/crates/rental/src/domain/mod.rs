//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Console, HistoryRental)
//! - Domain value objects (Availability, RentalPeriod)
//! - Domain services (rental pricing)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
