//! External Collaborators
//!
//! Outbound services called synchronously from use cases. Production
//! implementations live in `infra/`; tests use in-memory fakes.

use rust_decimal::Decimal;

use crate::domain::value_object::email::Email;
use crate::error::AccountResult;

/// Sends the registration confirmation email
#[trait_variant::make(WelcomeMailer: Send)]
pub trait LocalWelcomeMailer {
    /// Fails with `AccountError::Mailer` if the relay rejects the message
    async fn send_welcome_email(&self, recipient: &Email) -> AccountResult<()>;
}

/// Invoice to be created at the payment gateway
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRequest {
    /// Our idempotency reference
    pub external_id: String,
    pub amount: Decimal,
    pub description: String,
    pub payer_email: String,
}

/// Invoice as returned by the gateway
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub external_id: String,
    pub amount: Decimal,
    pub status: String,
    pub invoice_url: String,
}

/// Payment gateway invoice API
#[trait_variant::make(InvoiceGateway: Send)]
pub trait LocalInvoiceGateway {
    /// Fails with `AccountError::PaymentGateway` on transport or API errors
    async fn create_invoice(&self, request: &InvoiceRequest) -> AccountResult<Invoice>;
}
