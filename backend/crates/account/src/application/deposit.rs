//! Deposit Use Case
//!
//! Tops up a user's balance after creating a payment-gateway invoice.
//!
//! The credit is applied as soon as the invoice exists, not when it is
//! paid. Each credit is recorded in `deposit_invoices` with the gateway's
//! invoice id so it can be reconciled later.

use std::sync::Arc;

use kernel::id::UserId;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::application::config::AccountConfig;
use crate::domain::entity::{
    deposit_invoice::{DepositInvoice, NewDepositInvoice},
    user::User,
};
use crate::domain::gateway::{InvoiceGateway, InvoiceRequest};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::deposit_amount::DepositAmount;
use crate::error::{AccountError, AccountResult};

pub struct DepositInput {
    pub user_id: UserId,
    pub amount: Decimal,
}

#[derive(Debug)]
pub struct DepositOutput {
    pub user: User,
    pub invoice: DepositInvoice,
}

pub struct DepositUseCase<U, G>
where
    U: UserRepository,
    G: InvoiceGateway,
{
    user_repo: Arc<U>,
    gateway: Arc<G>,
    config: Arc<AccountConfig>,
}

impl<U, G> DepositUseCase<U, G>
where
    U: UserRepository,
    G: InvoiceGateway,
{
    pub fn new(user_repo: Arc<U>, gateway: Arc<G>, config: Arc<AccountConfig>) -> Self {
        Self {
            user_repo,
            gateway,
            config,
        }
    }

    pub async fn execute(&self, input: DepositInput) -> AccountResult<DepositOutput> {
        let amount = DepositAmount::with_limit(input.amount, self.config.max_deposit)?;

        let user = self
            .user_repo
            .find_by_id(input.user_id)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        let request = InvoiceRequest {
            external_id: external_id_for(user.id),
            amount: amount.value(),
            description: format!("Deposit top-up for user {}", user.id),
            payer_email: user.email.as_str().to_string(),
        };

        // 失敗時は残高を変更しない
        let invoice = self.gateway.create_invoice(&request).await?;

        let record = NewDepositInvoice {
            user_id: user.id,
            gateway_invoice_id: invoice.id,
            external_id: invoice.external_id,
            amount: amount.value(),
            invoice_url: invoice.invoice_url,
            status: invoice.status,
        };

        let (user, invoice) = self
            .user_repo
            .credit_deposit(user.id, amount.value(), &record)
            .await?;

        tracing::info!(
            user_id = %user.id,
            amount = %amount,
            balance = %user.deposit,
            invoice_id = %invoice.gateway_invoice_id,
            "Deposit credited"
        );

        Ok(DepositOutput { user, invoice })
    }
}

/// `deposit-<user id>-<uuid v4>`
fn external_id_for(user_id: UserId) -> String {
    format!("deposit-{}-{}", user_id, Uuid::new_v4())
}
