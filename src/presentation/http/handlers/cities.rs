use axum::{Json, extract::State};

use crate::domain::catalogue::entity::City;
use crate::presentation::http::state::AppState;

pub async fn list_cities(State(state): State<AppState>) -> Json<Vec<City>> {
    Json(state.recommendations.list_cities())
}
