//! Application Configuration
//!
//! Configuration for the Account application layer.

use std::time::Duration;

use platform::token::{DEFAULT_TOKEN_TTL, TokenCodec, TokenError};
use rust_decimal::Decimal;

use crate::domain::value_object::deposit_amount::MAX_DEPOSIT_AMOUNT;

/// Account application configuration
#[derive(Clone)]
pub struct AccountConfig {
    /// HS256 signing secret (at least 32 bytes)
    pub token_secret: Vec<u8>,
    /// Bearer token lifetime (24 hours)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Upper bound for a single top-up
    pub max_deposit: Decimal,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
            max_deposit: MAX_DEPOSIT_AMOUNT,
        }
    }
}

impl AccountConfig {
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random token secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::new(secret.to_vec())
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        self.password_pepper = Some(pepper.into());
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Build the token codec; fails if the secret is too short
    pub fn token_codec(&self) -> Result<TokenCodec, TokenError> {
        TokenCodec::new(&self.token_secret, self.token_ttl)
    }
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("max_deposit", &self.max_deposit)
            .finish()
    }
}
