use auth::AuthenticationRequest;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    let authentication = state
        .providers
        .authenticate(AuthenticationRequest::credentials(body.principal, body.credentials))
        .await?;

    let token = state.jwt_handler.create(&authentication.to_claims())?;

    let user = authentication
        .details()
        .ok_or_else(|| ApiError::InternalServerError("Authenticated user missing".to_string()))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            token,
            user: user.into(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    principal: String,
    credentials: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub token: String,
    pub user: UserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub seq: i64,
    pub name: String,
    pub email: String,
    pub login_count: i32,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            seq: user.seq,
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            login_count: user.login_count,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}
