//! Xendit Invoice Gateway
//!
//! `POST {base_url}/v2/invoices` authenticated with HTTP basic auth
//! (secret API key as username, empty password).

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::gateway::{Invoice, InvoiceGateway, InvoiceRequest};
use crate::error::{AccountError, AccountResult};

pub const DEFAULT_XENDIT_BASE_URL: &str = "https://api.xendit.co";

#[derive(Clone)]
pub struct XenditConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for XenditConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XenditConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Clone)]
pub struct XenditGateway {
    client: reqwest::Client,
    api_key: String,
    invoices_url: String,
}

impl XenditGateway {
    pub fn new(config: &XenditConfig) -> AccountResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AccountError::Internal(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            invoices_url: format!("{}/v2/invoices", config.base_url.trim_end_matches('/')),
        })
    }
}

#[derive(Serialize)]
struct CreateInvoiceBody<'a> {
    external_id: &'a str,
    amount: Decimal,
    description: &'a str,
    payer_email: &'a str,
}

#[derive(Deserialize)]
struct InvoiceResponseBody {
    id: String,
    external_id: String,
    amount: Decimal,
    status: String,
    invoice_url: String,
}

impl From<InvoiceResponseBody> for Invoice {
    fn from(body: InvoiceResponseBody) -> Self {
        Invoice {
            id: body.id,
            external_id: body.external_id,
            amount: body.amount,
            status: body.status,
            invoice_url: body.invoice_url,
        }
    }
}

impl InvoiceGateway for XenditGateway {
    async fn create_invoice(&self, request: &InvoiceRequest) -> AccountResult<Invoice> {
        let body = CreateInvoiceBody {
            external_id: &request.external_id,
            amount: request.amount,
            description: &request.description,
            payer_email: &request.payer_email,
        };

        let response = self
            .client
            .post(&self.invoices_url)
            .basic_auth(&self.api_key, Some(""))
            .json(&body)
            .send()
            .await
            .map_err(|e| AccountError::PaymentGateway(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AccountError::PaymentGateway(format!(
                "gateway returned {status}: {detail}"
            )));
        }

        let invoice: Invoice = response
            .json::<InvoiceResponseBody>()
            .await
            .map_err(|e| AccountError::PaymentGateway(format!("unexpected response: {e}")))?
            .into();

        tracing::debug!(
            invoice_id = %invoice.id,
            external_id = %invoice.external_id,
            status = %invoice.status,
            "Invoice created"
        );

        Ok(invoice)
    }
}
