use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/drink", post(handlers::drink_form))
        .route("/reset", post(handlers::reset_form))
        .route("/api/today", get(handlers::get_today))
        .route("/api/drink", post(handlers::drink))
        .route("/api/reset", post(handlers::reset))
        .route("/api/history", get(handlers::get_history))
        .route(
            "/api/settings",
            get(handlers::get_settings).put(handlers::put_settings),
        )
        .with_state(state)
}
