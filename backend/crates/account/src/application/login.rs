//! Login Use Case
//!
//! Verifies credentials and issues a bearer token.

use std::sync::Arc;

use platform::token::TokenCodec;

use crate::application::config::AccountConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AccountError, AccountResult};

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginOutput {
    pub token: String,
}

impl std::fmt::Debug for LoginOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginOutput")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenCodec>,
    config: Arc<AccountConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenCodec>, config: Arc<AccountConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    /// Every credential problem collapses into `InvalidCredentials`
    pub async fn execute(&self, input: LoginInput) -> AccountResult<LoginOutput> {
        let email = Email::new(input.email).map_err(|_| AccountError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AccountError::InvalidCredentials)?;

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            tracing::debug!(email = %email.masked(), "Login for unknown email");
            return Err(AccountError::InvalidCredentials);
        };

        if !user.password.verify(&raw_password, self.config.pepper()) {
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id.value(), user.email.as_str())?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutput { token })
    }
}
