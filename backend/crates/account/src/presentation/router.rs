//! Account Router

use axum::{Router, middleware, routing::post};
use platform::token::TokenCodec;
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::gateway::{InvoiceGateway, WelcomeMailer};
use crate::domain::repository::UserRepository;
use crate::infra::{postgres::PgAccountRepository, smtp::SmtpMailer, xendit::XenditGateway};
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::{BearerAuthState, require_bearer};

/// Create the Account router with the production collaborators
pub fn account_router(
    repo: PgAccountRepository,
    mailer: SmtpMailer,
    gateway: XenditGateway,
    tokens: Arc<TokenCodec>,
    config: AccountConfig,
) -> Router {
    account_router_generic(repo, mailer, gateway, tokens, config)
}

/// Create a generic Account router for any repository / collaborator
///
/// `/deposit` is guarded by the bearer middleware; registration and login
/// are public.
pub fn account_router_generic<R, M, G>(
    repo: R,
    mailer: M,
    gateway: G,
    tokens: Arc<TokenCodec>,
    config: AccountConfig,
) -> Router
where
    R: UserRepository + Send + Sync + 'static,
    M: WelcomeMailer + Send + Sync + 'static,
    G: InvoiceGateway + Send + Sync + 'static,
{
    let bearer = BearerAuthState::new(tokens.clone());

    let state = AccountAppState {
        repo: Arc::new(repo),
        mailer: Arc::new(mailer),
        gateway: Arc::new(gateway),
        tokens,
        config: Arc::new(config),
    };

    Router::new()
        .route("/deposit", post(handlers::deposit::<R, M, G>))
        .route_layer(middleware::from_fn_with_state(bearer, require_bearer))
        .route("/users/register", post(handlers::register::<R, M, G>))
        .route("/users/login", post(handlers::login::<R, M, G>))
        .with_state(state)
}
