//! HTTP Handlers

use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use kernel::principal::Principal;
use platform::token::TokenCodec;
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::{
    DepositInput, DepositUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::gateway::{InvoiceGateway, WelcomeMailer};
use crate::domain::repository::UserRepository;
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{
    CredentialsRequest, DepositRequest, DepositResponse, InvoiceResponse, LoginResponse,
    RegisterResponse, UserResponse,
};

/// Shared state for account handlers
pub struct AccountAppState<R, M, G>
where
    R: UserRepository + Send + Sync + 'static,
    M: WelcomeMailer + Send + Sync + 'static,
    G: InvoiceGateway + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub mailer: Arc<M>,
    pub gateway: Arc<G>,
    pub tokens: Arc<TokenCodec>,
    pub config: Arc<AccountConfig>,
}

// derive(Clone) would require R/M/G: Clone
impl<R, M, G> Clone for AccountAppState<R, M, G>
where
    R: UserRepository + Send + Sync + 'static,
    M: WelcomeMailer + Send + Sync + 'static,
    G: InvoiceGateway + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            mailer: self.mailer.clone(),
            gateway: self.gateway.clone(),
            tokens: self.tokens.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /users/register
pub async fn register<R, M, G>(
    State(state): State<AccountAppState<R, M, G>>,
    WithRejection(Json(req), _): WithRejection<Json<CredentialsRequest>, AccountError>,
) -> AccountResult<(StatusCode, Json<RegisterResponse>)>
where
    R: UserRepository + Send + Sync + 'static,
    M: WelcomeMailer + Send + Sync + 'static,
    G: InvoiceGateway + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.mailer.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(RegisterInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
            user: UserResponse::from(&output.user),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /users/login
pub async fn login<R, M, G>(
    State(state): State<AccountAppState<R, M, G>>,
    WithRejection(Json(req), _): WithRejection<Json<CredentialsRequest>, AccountError>,
) -> AccountResult<Json<LoginResponse>>
where
    R: UserRepository + Send + Sync + 'static,
    M: WelcomeMailer + Send + Sync + 'static,
    G: InvoiceGateway + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: output.token,
    }))
}

// ============================================================================
// Deposit (requires bearer token)
// ============================================================================

/// POST /deposit
pub async fn deposit<R, M, G>(
    State(state): State<AccountAppState<R, M, G>>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(req), _): WithRejection<Json<DepositRequest>, AccountError>,
) -> AccountResult<Json<DepositResponse>>
where
    R: UserRepository + Send + Sync + 'static,
    M: WelcomeMailer + Send + Sync + 'static,
    G: InvoiceGateway + Send + Sync + 'static,
{
    let use_case = DepositUseCase::new(
        state.repo.clone(),
        state.gateway.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(DepositInput {
            user_id: principal.user_id,
            amount: req.deposit,
        })
        .await?;

    Ok(Json(DepositResponse {
        message: "Deposit successful".to_string(),
        user: UserResponse::from(&output.user),
        invoice: InvoiceResponse::from(&output.invoice),
    }))
}
