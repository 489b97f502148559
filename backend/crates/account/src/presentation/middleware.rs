//! Bearer Token Middleware
//!
//! Verifies the `Authorization` header and hands the caller's identity to
//! protected handlers as `Extension<Principal>`.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::Response;
use kernel::id::UserId;
use kernel::principal::Principal;
use platform::token::TokenCodec;
use std::sync::Arc;

use crate::error::AccountError;

/// Middleware state
#[derive(Clone)]
pub struct BearerAuthState {
    pub tokens: Arc<TokenCodec>,
}

impl BearerAuthState {
    pub fn new(tokens: Arc<TokenCodec>) -> Self {
        Self { tokens }
    }
}

/// Middleware that requires a valid bearer token
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_bearer(
    State(state): State<BearerAuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AccountError> {
    let token = extract_token(req.headers()).ok_or(AccountError::MissingToken)?;
    let claims = state.tokens.verify(token)?;

    req.extensions_mut()
        .insert(Principal::new(UserId::new(claims.sub), claims.email));

    Ok(next.run(req).await)
}

/// Raw token or `Bearer <token>`
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim();

    let token = match value.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ => value,
    };

    // a scheme with nothing after it ("Bearer " trims to "Bearer")
    (!token.is_empty() && !token.eq_ignore_ascii_case("bearer")).then_some(token)
}
