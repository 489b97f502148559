//! HTTP Handlers
//!
//! Both routes expect the bearer middleware to have inserted a
//! `Principal` into the request extensions.

use crate::application::{ListConsolesUseCase, RentConsoleInput, RentConsoleUseCase};
use crate::domain::repository::RentalRepository;
use crate::error::{RentalError, RentalResult};
use crate::presentation::dto::{ConsoleResponse, RentRequest, RentResponse};
use axum::Json;
use axum::extract::{Extension, State};
use axum_extra::extract::WithRejection;
use kernel::principal::Principal;
use std::sync::Arc;

/// Shared state for rental handlers
pub struct RentalAppState<R>
where
    R: RentalRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for RentalAppState<R>
where
    R: RentalRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// GET /console
pub async fn list_consoles<R>(
    State(state): State<RentalAppState<R>>,
    Extension(principal): Extension<Principal>,
) -> RentalResult<Json<Vec<ConsoleResponse>>>
where
    R: RentalRepository + Send + Sync + 'static,
{
    let consoles = ListConsolesUseCase::new(state.repo.clone()).execute().await?;

    tracing::debug!(user_id = %principal.user_id, "Console list requested");

    Ok(Json(consoles.into_iter().map(ConsoleResponse::from).collect()))
}

/// POST /rent
pub async fn rent_console<R>(
    State(state): State<RentalAppState<R>>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(req), _): WithRejection<Json<RentRequest>, RentalError>,
) -> RentalResult<Json<RentResponse>>
where
    R: RentalRepository + Send + Sync + 'static,
{
    let rental = RentConsoleUseCase::new(state.repo.clone())
        .execute(RentConsoleInput {
            user_id: principal.user_id,
            console_id: req.console_id,
            rental_date: req.rental_date,
            return_date: req.return_date,
        })
        .await?;

    Ok(Json(RentResponse {
        message: "Console rented successfully".to_string(),
        rental_cost: rental.rental_cost,
    }))
}
