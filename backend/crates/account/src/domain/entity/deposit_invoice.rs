//! Deposit Invoice Entity
//!
//! Ledger row written together with every balance credit so top-ups can be
//! reconciled against the gateway's payment status.

use chrono::{DateTime, Utc};
use kernel::id::{DepositInvoiceId, UserId};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct DepositInvoice {
    pub id: DepositInvoiceId,
    pub user_id: UserId,
    /// Invoice id assigned by the gateway
    pub gateway_invoice_id: String,
    /// Our reference, `deposit-<user id>-<uuid>`
    pub external_id: String,
    pub amount: Decimal,
    pub invoice_url: String,
    /// Gateway status at creation time (usually `PENDING`)
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Invoice data to record alongside a credit
#[derive(Debug, Clone, PartialEq)]
pub struct NewDepositInvoice {
    pub user_id: UserId,
    pub gateway_invoice_id: String,
    pub external_id: String,
    pub amount: Decimal,
    pub invoice_url: String,
    pub status: String,
}
