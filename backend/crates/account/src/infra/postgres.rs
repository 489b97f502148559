//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::{DepositInvoiceId, UserId};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entity::{
    deposit_invoice::{DepositInvoice, NewDepositInvoice},
    user::{NewUser, User},
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::UserPassword};
use crate::error::{AccountError, AccountResult};

const USER_COLUMNS: &str = "id, email, password, deposit, created_at, updated_at";

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgAccountRepository {
    async fn create(&self, user: &NewUser) -> AccountResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (email, password)
            VALUES ($1, $2)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.email.as_str())
        .bind(user.password.as_phc_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // exists_by_email との競合
            if is_unique_violation(&e) {
                AccountError::EmailTaken
            } else {
                AccountError::Database(e)
            }
        })?;

        row.into_user()
    }

    async fn find_by_id(&self, user_id: UserId) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn credit_deposit(
        &self,
        user_id: UserId,
        amount: Decimal,
        invoice: &NewDepositInvoice,
    ) -> AccountResult<(User, DepositInvoice)> {
        let mut tx = self.pool.begin().await?;

        // 加算は DB 側で行う（同時入金で更新が失われない）
        let user_row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            UPDATE users
            SET deposit = deposit + $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user_id.value())
        .bind(amount)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AccountError::UserNotFound)?;

        let invoice_row = sqlx::query_as::<_, DepositInvoiceRow>(
            r#"
            INSERT INTO deposit_invoices (
                user_id,
                gateway_invoice_id,
                external_id,
                amount,
                invoice_url,
                status
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id,
                user_id,
                gateway_invoice_id,
                external_id,
                amount,
                invoice_url,
                status,
                created_at
            "#,
        )
        .bind(invoice.user_id.value())
        .bind(&invoice.gateway_invoice_id)
        .bind(&invoice.external_id)
        .bind(invoice.amount)
        .bind(&invoice.invoice_url)
        .bind(&invoice.status)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((user_row.into_user()?, invoice_row.into_invoice()))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password: String,
    deposit: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AccountResult<User> {
        let password = UserPassword::from_phc_string(self.password)?;

        Ok(User {
            id: UserId::new(self.id),
            email: Email::from_db(self.email),
            password,
            deposit: self.deposit,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct DepositInvoiceRow {
    id: i64,
    user_id: i64,
    gateway_invoice_id: String,
    external_id: String,
    amount: Decimal,
    invoice_url: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl DepositInvoiceRow {
    fn into_invoice(self) -> DepositInvoice {
        DepositInvoice {
            id: DepositInvoiceId::new(self.id),
            user_id: UserId::new(self.user_id),
            gateway_invoice_id: self.gateway_invoice_id,
            external_id: self.external_id,
            amount: self.amount,
            invoice_url: self.invoice_url,
            status: self.status,
            created_at: self.created_at,
        }
    }
}
