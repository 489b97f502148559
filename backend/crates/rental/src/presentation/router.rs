//! Rental Router
//!
//! The caller is responsible for layering bearer authentication on top.

use crate::domain::repository::RentalRepository;
use crate::infra::postgres::PgRentalRepository;
use crate::presentation::handlers::{self, RentalAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the rental router with PostgreSQL repository
pub fn rental_router(repo: PgRentalRepository) -> Router {
    rental_router_generic(repo)
}

/// Create a generic rental router for any repository implementation
pub fn rental_router_generic<R>(repo: R) -> Router
where
    R: RentalRepository + Send + Sync + 'static,
{
    let state = RentalAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/console", get(handlers::list_consoles::<R>))
        .route("/rent", post(handlers::rent_console::<R>))
        .with_state(state)
}
