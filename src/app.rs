use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/promises", get(handlers::get_promises))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/state", get(handlers::get_state))
        .route("/api/events", post(handlers::post_event))
        .with_state(state)
}
