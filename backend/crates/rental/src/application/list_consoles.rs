//! List Consoles Use Case

use crate::domain::entities::Console;
use crate::domain::repository::RentalRepository;
use crate::error::RentalResult;
use std::sync::Arc;

/// Lists consoles that can currently be rented
pub struct ListConsolesUseCase<R>
where
    R: RentalRepository,
{
    repo: Arc<R>,
}

impl<R> ListConsolesUseCase<R>
where
    R: RentalRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> RentalResult<Vec<Console>> {
        let consoles = self.repo.list_available().await?;
        tracing::debug!(count = consoles.len(), "Listed available consoles");
        Ok(consoles)
    }
}
