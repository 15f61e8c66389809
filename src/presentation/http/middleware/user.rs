use axum::http::{HeaderMap, header};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::{account::entity::Account, shared::ids::AccountId};
use crate::presentation::http::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

pub fn issue_user_token(
    account: &Account,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, AppError> {
    let exp = chrono::Duration::try_hours(ttl_hours)
        .and_then(|ttl| chrono::Utc::now().checked_add_signed(ttl))
        .and_then(|expires_at| usize::try_from(expires_at.timestamp()).ok())
        .ok_or_else(|| AppError::Internal(format!("Token lifetime out of range: {}h", ttl_hours)))?;
    let claims = UserClaims {
        sub: account.id.to_string(),
        email: account.email.clone(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

pub fn decode_optional_user_claims(headers: &HeaderMap, secret: &str) -> Option<UserClaims> {
    let token = extract_bearer_token(headers)?;
    decode::<UserClaims>(
        &token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|d| d.claims)
}

pub fn decode_required_user_claims(
    headers: &HeaderMap,
    secret: &str,
) -> Result<UserClaims, AppError> {
    decode_optional_user_claims(headers, secret)
        .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))
}

/// Account id from a valid bearer token, or `None` for guests and bad tokens.
pub fn optional_account_id(headers: &HeaderMap, secret: &str) -> Option<AccountId> {
    decode_optional_user_claims(headers, secret).and_then(|c| c.sub.parse().ok())
}

pub fn required_account_id(headers: &HeaderMap, secret: &str) -> Result<AccountId, AppError> {
    let claims = decode_required_user_claims(headers, secret)?;
    claims
        .sub
        .parse()
        .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))
}
