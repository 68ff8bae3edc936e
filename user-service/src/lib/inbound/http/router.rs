use std::sync::Arc;
use std::time::Duration;

use auth::CredentialAuthenticator;
use auth::JwtHandler;
use auth::ProviderChain;
use auth::TokenAuthenticator;
use auth::UserLookup;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::create_user::create_user;
use super::handlers::get_me::get_me;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub providers: Arc<ProviderChain<User>>,
    pub jwt_handler: Arc<JwtHandler>,
}

/// Provider chain for the service: email/password logins first, then bearer tokens.
pub fn create_provider_chain<L>(user_lookup: Arc<L>, jwt_handler: Arc<JwtHandler>) -> ProviderChain<User>
where
    L: UserLookup<User = User>,
{
    ProviderChain::new()
        .with_provider(Arc::new(CredentialAuthenticator::new(user_lookup)))
        .with_provider(Arc::new(TokenAuthenticator::<User>::new(jwt_handler)))
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    providers: Arc<ProviderChain<User>>,
    jwt_handler: Arc<JwtHandler>,
) -> Router {
    let state = AppState {
        user_service,
        providers,
        jwt_handler,
    };

    let public_routes = Router::new()
        .route("/api/auth/login", post(authenticate))
        .route("/api/users", post(create_user));

    let protected_routes = Router::new()
        .route("/api/users/me", get(get_me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
