use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
};
use serde::Deserialize;

use crate::domain::catalogue::entity::Place;
use crate::presentation::http::{
    errors::AppError, middleware::user::optional_account_id, state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct PlacesQuery {
    #[serde(alias = "cityId", alias = "city")]
    pub city_id: Option<String>,
}

/// Places of a city the caller has not swiped yet. Guests get the whole city.
pub async fn get_places(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PlacesQuery>,
) -> Result<Json<Vec<Place>>, AppError> {
    let city_id = params
        .city_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("city_id is required".to_string()))?;

    let user_id = optional_account_id(&headers, &state.config.jwt_secret);
    let places = state
        .recommendations
        .unseen_places(user_id, city_id)
        .await?;
    Ok(Json(places))
}
