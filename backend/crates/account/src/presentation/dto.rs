//! API DTOs (Data Transfer Objects)

use kernel::id::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entity::{deposit_invoice::DepositInvoice, user::User};

// ============================================================================
// Register / Login
// ============================================================================

/// Register and login request body
///
/// Missing fields default to empty strings so they fail validation with a
/// field-specific message instead of a generic body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Public view of a user; the password hash is never serialized
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub deposit: Decimal,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.as_str().to_string(),
            deposit: user.deposit,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

// ============================================================================
// Deposit
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct DepositRequest {
    pub deposit: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceResponse {
    pub id: String,
    pub external_id: String,
    pub amount: Decimal,
    pub status: String,
    pub invoice_url: String,
}

impl From<&DepositInvoice> for InvoiceResponse {
    fn from(invoice: &DepositInvoice) -> Self {
        Self {
            id: invoice.gateway_invoice_id.clone(),
            external_id: invoice.external_id.clone(),
            amount: invoice.amount,
            status: invoice.status.clone(),
            invoice_url: invoice.invoice_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DepositResponse {
    pub message: String,
    pub user: UserResponse,
    pub invoice: InvoiceResponse,
}
