use auth::AuthenticationRequest;
use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated principal in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_key: i64,
    pub name: String,
    pub authorities: Vec<String>,
}

/// Middleware that authenticates bearer tokens and adds the principal to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?.to_string();

    let authentication = state
        .providers
        .authenticate(AuthenticationRequest::bearer(token))
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Bearer authentication failed");
            ApiError::from(e).into_response()
        })?;

    let principal = authentication.principal();
    req.extensions_mut().insert(AuthenticatedUser {
        user_key: principal.user_key,
        name: principal.name.clone(),
        authorities: authentication.authorities().to_vec(),
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
        .into_response()
    })
}
