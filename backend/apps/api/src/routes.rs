//! Router composition
//!
//! Account routes carry their own guard on `/deposit`; the rental routes
//! are guarded here as a whole.

use std::sync::Arc;

use account::{BearerAuthState, require_bearer};
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use platform::token::TokenCodec;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Require a bearer token on every route of `router`
pub fn require_token(router: Router, tokens: Arc<TokenCodec>) -> Router {
    router.route_layer(middleware::from_fn_with_state(
        BearerAuthState::new(tokens),
        require_bearer,
    ))
}

fn cors(frontend_origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}

/// Full application: public account routes, guarded rental routes, tracing and CORS
pub fn app_router(
    account: Router,
    rental: Router,
    tokens: Arc<TokenCodec>,
    frontend_origins: &[String],
) -> Router {
    Router::new()
        .merge(account)
        .merge(require_token(rental, tokens))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors(frontend_origins)),
        )
}
