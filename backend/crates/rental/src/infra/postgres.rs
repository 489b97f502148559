//! PostgreSQL Repository Implementation

use crate::domain::entities::{Console, HistoryRental, NewHistoryRental};
use crate::domain::repository::RentalRepository;
use crate::domain::value_objects::Availability;
use crate::error::RentalResult;
use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{ConsoleId, HistoryRentalId, UserId};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgRentalRepository {
    pool: PgPool,
}

impl PgRentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RentalRepository for PgRentalRepository {
    async fn list_available(&self) -> RentalResult<Vec<Console>> {
        let rows = sqlx::query_as::<_, ConsoleRow>(
            r#"
            SELECT id, name, availability, rental_costs, category
            FROM rental_playstations
            WHERE availability = 'Available'
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ConsoleRow::into_console).collect()
    }

    async fn find_available(&self, console_id: ConsoleId) -> RentalResult<Option<Console>> {
        let row = sqlx::query_as::<_, ConsoleRow>(
            r#"
            SELECT id, name, availability, rental_costs, category
            FROM rental_playstations
            WHERE id = $1 AND availability = 'Available'
            "#,
        )
        .bind(console_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ConsoleRow::into_console).transpose()
    }

    async fn rent(&self, rental: &NewHistoryRental) -> RentalResult<Option<HistoryRental>> {
        let mut tx = self.pool.begin().await?;

        // Zero rows means another request flipped it first
        let flipped = sqlx::query(
            r#"
            UPDATE rental_playstations
            SET availability = 'Unavailable'
            WHERE id = $1 AND availability = 'Available'
            "#,
        )
        .bind(rental.console_id.value())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if flipped == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let row = sqlx::query_as::<_, HistoryRentalRow>(
            r#"
            INSERT INTO history_rentals (
                user_id,
                rental_id,
                rental_date,
                return_date,
                rental_cost,
                status
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id,
                user_id,
                rental_id,
                rental_date,
                return_date,
                rental_cost,
                status,
                created_at
            "#,
        )
        .bind(rental.user_id.value())
        .bind(rental.console_id.value())
        .bind(rental.rental_date)
        .bind(rental.return_date)
        .bind(rental.rental_cost)
        .bind(rental.status.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        row.into_history().map(Some)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ConsoleRow {
    id: i64,
    name: String,
    availability: String,
    rental_costs: Decimal,
    category: String,
}

impl ConsoleRow {
    fn into_console(self) -> RentalResult<Console> {
        Ok(Console {
            id: ConsoleId::new(self.id),
            name: self.name,
            availability: self.availability.parse::<Availability>()?,
            rental_costs: self.rental_costs,
            category: self.category,
        })
    }
}

#[derive(sqlx::FromRow)]
struct HistoryRentalRow {
    id: i64,
    user_id: i64,
    rental_id: i64,
    rental_date: NaiveDate,
    return_date: NaiveDate,
    rental_cost: Decimal,
    status: String,
    created_at: DateTime<Utc>,
}

impl HistoryRentalRow {
    fn into_history(self) -> RentalResult<HistoryRental> {
        Ok(HistoryRental {
            id: HistoryRentalId::new(self.id),
            user_id: UserId::new(self.user_id),
            console_id: ConsoleId::new(self.rental_id),
            rental_date: self.rental_date,
            return_date: self.return_date,
            rental_cost: self.rental_cost,
            status: self.status.parse()?,
            created_at: self.created_at,
        })
    }
}
