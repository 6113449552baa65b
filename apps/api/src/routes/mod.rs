pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::guide::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Guide API
        .route("/api/v1/guide/respond", post(handlers::handle_respond))
        .route("/api/v1/guide/classify", post(handlers::handle_classify))
        .with_state(state)
}
