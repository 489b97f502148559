//! In-memory repository for use-case and handler tests

use std::sync::Mutex;

use chrono::Utc;
use kernel::id::{ConsoleId, HistoryRentalId};
use rust_decimal::Decimal;

use crate::domain::entities::{Console, HistoryRental, NewHistoryRental};
use crate::domain::repository::RentalRepository;
use crate::domain::value_objects::Availability;
use crate::error::RentalResult;

#[derive(Default)]
struct State {
    consoles: Vec<Console>,
    history: Vec<HistoryRental>,
}

#[derive(Default)]
pub struct InMemoryRentalRepository {
    state: Mutex<State>,
}

impl InMemoryRentalRepository {
    pub fn with_consoles(consoles: Vec<Console>) -> Self {
        Self {
            state: Mutex::new(State {
                consoles,
                history: Vec::new(),
            }),
        }
    }

    pub fn availability_of(&self, id: ConsoleId) -> Option<Availability> {
        let state = self.state.lock().unwrap();
        state.consoles.iter().find(|c| c.id == id).map(|c| c.availability)
    }

    pub fn history(&self) -> Vec<HistoryRental> {
        self.state.lock().unwrap().history.clone()
    }
}

pub fn console(id: i64, name: &str, availability: Availability, per_day: i64) -> Console {
    Console {
        id: ConsoleId::new(id),
        name: name.to_string(),
        availability,
        rental_costs: Decimal::from(per_day),
        category: "PlayStation".to_string(),
    }
}

impl RentalRepository for InMemoryRentalRepository {
    async fn list_available(&self) -> RentalResult<Vec<Console>> {
        let state = self.state.lock().unwrap();
        let mut consoles: Vec<Console> =
            state.consoles.iter().filter(|c| c.is_available()).cloned().collect();
        consoles.sort_by_key(|c| c.id.value());
        Ok(consoles)
    }

    async fn find_available(&self, console_id: ConsoleId) -> RentalResult<Option<Console>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .consoles
            .iter()
            .find(|c| c.id == console_id && c.is_available())
            .cloned())
    }

    async fn rent(&self, rental: &NewHistoryRental) -> RentalResult<Option<HistoryRental>> {
        // let concurrent callers pass find_available before anyone flips
        tokio::task::yield_now().await;

        let mut state = self.state.lock().unwrap();
        let Some(console) = state
            .consoles
            .iter_mut()
            .find(|c| c.id == rental.console_id && c.is_available())
        else {
            return Ok(None);
        };
        console.availability = Availability::Unavailable;

        let entry = HistoryRental {
            id: HistoryRentalId::new(state.history.len() as i64 + 1),
            user_id: rental.user_id,
            console_id: rental.console_id,
            rental_date: rental.rental_date,
            return_date: rental.return_date,
            rental_cost: rental.rental_cost,
            status: rental.status,
            created_at: Utc::now(),
        };
        state.history.push(entry.clone());
        Ok(Some(entry))
    }
}
