use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/trend", get(handlers::get_trend))
        .route("/api/trend/hover", get(handlers::hover))
        .route("/api/trend/mute", post(handlers::toggle_mute))
        .with_state(state)
}
