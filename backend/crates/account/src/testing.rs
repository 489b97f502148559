//! In-memory fakes for use-case and handler tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use kernel::id::{DepositInvoiceId, UserId};
use rust_decimal::Decimal;

use crate::domain::entity::{
    deposit_invoice::{DepositInvoice, NewDepositInvoice},
    user::{NewUser, User},
};
use crate::domain::gateway::{Invoice, InvoiceGateway, InvoiceRequest, WelcomeMailer};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    invoices: Mutex<Vec<DepositInvoice>>,
}

impl InMemoryUserRepository {
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn invoice_count(&self) -> usize {
        self.invoices.lock().unwrap().len()
    }

    pub fn balance_of(&self, user_id: UserId) -> Option<Decimal> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.deposit)
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> AccountResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AccountError::EmailTaken);
        }

        let now = Utc::now();
        let created = User {
            id: UserId::new(users.len() as i64 + 1),
            email: user.email.clone(),
            password: user.password.clone(),
            deposit: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, user_id: UserId) -> AccountResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| &u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        Ok(self.users.lock().unwrap().iter().any(|u| &u.email == email))
    }

    async fn credit_deposit(
        &self,
        user_id: UserId,
        amount: Decimal,
        invoice: &NewDepositInvoice,
    ) -> AccountResult<(User, DepositInvoice)> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(AccountError::UserNotFound)?;
        user.deposit += amount;
        user.updated_at = Utc::now();

        let mut invoices = self.invoices.lock().unwrap();
        let record = DepositInvoice {
            id: DepositInvoiceId::new(invoices.len() as i64 + 1),
            user_id,
            gateway_invoice_id: invoice.gateway_invoice_id.clone(),
            external_id: invoice.external_id.clone(),
            amount: invoice.amount,
            invoice_url: invoice.invoice_url.clone(),
            status: invoice.status.clone(),
            created_at: Utc::now(),
        };
        invoices.push(record.clone());

        Ok((user.clone(), record))
    }
}

/// Records recipients; fails every send when `failing`
#[derive(Default)]
pub struct FakeMailer {
    pub failing: bool,
    pub sent: Mutex<Vec<String>>,
}

impl FakeMailer {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }
}

impl WelcomeMailer for FakeMailer {
    async fn send_welcome_email(&self, recipient: &Email) -> AccountResult<()> {
        if self.failing {
            return Err(AccountError::Mailer("535 authentication failed".to_string()));
        }
        self.sent.lock().unwrap().push(recipient.as_str().to_string());
        Ok(())
    }
}

/// Echoes the request back as a PENDING invoice
#[derive(Default)]
pub struct FakeGateway {
    pub failing: bool,
    pub calls: AtomicUsize,
}

impl FakeGateway {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl InvoiceGateway for FakeGateway {
    async fn create_invoice(&self, request: &InvoiceRequest) -> AccountResult<Invoice> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.failing {
            return Err(AccountError::PaymentGateway("503 Service Unavailable".to_string()));
        }

        Ok(Invoice {
            id: format!("inv_{n}"),
            external_id: request.external_id.clone(),
            amount: request.amount,
            status: "PENDING".to_string(),
            invoice_url: format!("https://checkout.example.com/inv_{n}"),
        })
    }
}
