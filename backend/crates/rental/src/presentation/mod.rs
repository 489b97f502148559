//! Presentation Layer - HTTP handlers and routing

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::RentalAppState;
pub use router::{rental_router, rental_router_generic};
