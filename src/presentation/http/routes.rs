use super::{
    handlers::{auth, cities, health, me, places, swipes},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Catalogue
        .route("/api/v1/cities", get(cities::list_cities))
        .route("/api/v1/places", get(places::get_places))
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login_user))
        .route("/api/v1/auth/me", get(auth::me))
        // Swipes
        .route("/api/v1/swipes", post(swipes::record_swipe))
        // User workspace
        .route("/api/v1/me/decisions", get(swipes::list_decisions))
        .route("/api/v1/me/liked-places", get(me::list_liked_places))
        .route("/api/v1/me/progress", get(me::get_progress))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
