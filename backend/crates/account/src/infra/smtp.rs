//! SMTP Welcome Mailer
//!
//! Sends the registration email through an authenticated STARTTLS relay.
//! Certificates are verified.

use std::time::Duration;

use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::gateway::WelcomeMailer;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

const WELCOME_SUBJECT: &str = "Welcome to Console Rental!";
const WELCOME_BODY: &str = "Congratulations, your registration was successful!";

#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Sender address; defaults to `username`
    pub from: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("from", &self.from)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> AccountResult<Self> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| AccountError::Internal(format!("Invalid SMTP_FROM address: {e}")))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| AccountError::Internal(format!("Invalid SMTP relay: {e}")))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(config.timeout))
            .build();

        Ok(Self { transport, from })
    }
}

fn welcome_message(from: &Mailbox, recipient: &Email) -> AccountResult<Message> {
    let to: Mailbox = recipient
        .as_str()
        .parse()
        .map_err(|e| AccountError::Mailer(format!("Invalid recipient: {e}")))?;

    Message::builder()
        .from(from.clone())
        .to(to)
        .subject(WELCOME_SUBJECT)
        .header(ContentType::TEXT_PLAIN)
        .body(WELCOME_BODY.to_string())
        .map_err(|e| AccountError::Mailer(e.to_string()))
}

impl WelcomeMailer for SmtpMailer {
    async fn send_welcome_email(&self, recipient: &Email) -> AccountResult<()> {
        let message = welcome_message(&self.from, recipient)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AccountError::Mailer(e.to_string()))?;

        tracing::debug!(recipient = %recipient.masked(), "Welcome email sent");
        Ok(())
    }
}
