use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
};
use serde::Deserialize;

use crate::application::recommendations::dto::CityProgress;
use crate::domain::catalogue::entity::Place;
use crate::presentation::http::{
    errors::AppError, middleware::user::required_account_id, state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    #[serde(alias = "cityId", alias = "city")]
    pub city_id: Option<String>,
}

pub async fn list_liked_places(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Place>>, AppError> {
    let user_id = required_account_id(&headers, &state.config.jwt_secret)?;
    Ok(Json(state.recommendations.liked_places(user_id).await?))
}

/// Swipe progress for `city_id`, or for the account's own city when omitted.
pub async fn get_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ProgressQuery>,
) -> Result<Json<CityProgress>, AppError> {
    let user_id = required_account_id(&headers, &state.config.jwt_secret)?;
    let city_id = match params.city_id.filter(|s| !s.trim().is_empty()) {
        Some(city_id) => city_id.trim().to_string(),
        None => state.accounts.current_account(user_id).await?.city_id,
    };
    Ok(Json(state.recommendations.progress(user_id, &city_id).await?))
}
