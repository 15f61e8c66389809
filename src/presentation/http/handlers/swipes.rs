use axum::{Json, extract::State, http::HeaderMap};
use serde_json::{Value, json};

use crate::application::swipes::dto::RecordSwipeRequest;
use crate::domain::preference::entity::Decision;
use crate::presentation::http::{
    errors::AppError, middleware::user::required_account_id, state::AppState,
};

pub async fn record_swipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<RecordSwipeRequest>,
) -> Result<Json<Value>, AppError> {
    let user_id = required_account_id(&headers, &state.config.jwt_secret)?;
    state.swipes.record_swipe(user_id, body).await?;
    Ok(Json(json!({ "success": true })))
}

pub async fn list_decisions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Decision>>, AppError> {
    let user_id = required_account_id(&headers, &state.config.jwt_secret)?;
    Ok(Json(state.swipes.history(user_id).await?))
}
