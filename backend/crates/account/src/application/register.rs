//! Register Use Case
//!
//! Creates a new user account and sends the welcome email.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::gateway::WelcomeMailer;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AccountError, AccountResult};

pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct RegisterOutput {
    pub user: User,
}

pub struct RegisterUseCase<U, M>
where
    U: UserRepository,
    M: WelcomeMailer,
{
    user_repo: Arc<U>,
    mailer: Arc<M>,
    config: Arc<AccountConfig>,
}

impl<U, M> RegisterUseCase<U, M>
where
    U: UserRepository,
    M: WelcomeMailer,
{
    pub fn new(user_repo: Arc<U>, mailer: Arc<M>, config: Arc<AccountConfig>) -> Self {
        Self {
            user_repo,
            mailer,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<RegisterOutput> {
        let email = Email::new(input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AccountError::EmailTaken);
        }

        let password = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        // メール送信に失敗した場合はユーザーを作成しない
        self.mailer.send_welcome_email(&email).await?;

        let user = self
            .user_repo
            .create(&NewUser::new(email, password))
            .await?;

        tracing::info!(
            user_id = %user.id,
            email = %user.email.masked(),
            "User registered"
        );

        Ok(RegisterOutput { user })
    }
}
