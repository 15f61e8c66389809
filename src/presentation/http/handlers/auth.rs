use axum::{Json, extract::State, http::HeaderMap, http::StatusCode};
use serde::Serialize;

use crate::application::accounts::dto::{LoginRequest, RegisterAccountRequest};
use crate::domain::account::entity::Account;
use crate::presentation::http::{
    errors::AppError,
    middleware::user::{issue_user_token, required_account_id},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Account,
}

fn auth_response(state: &AppState, user: Account) -> Result<AuthResponse, AppError> {
    let token = issue_user_token(&user, &state.config.jwt_secret, state.config.token_ttl_hours)?;
    Ok(AuthResponse { token, user })
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterAccountRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let user = state.accounts.register(body).await?;
    Ok((StatusCode::CREATED, Json(auth_response(&state, user)?)))
}

pub async fn login_user(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = state.accounts.authenticate(body).await?;
    tracing::info!(account_id = %user.id, "User logged in");
    Ok(Json(auth_response(&state, user)?))
}

pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Account>, AppError> {
    let user_id = required_account_id(&headers, &state.config.jwt_secret)?;
    let user = state.accounts.current_account(user_id).await?;
    Ok(Json(user))
}
