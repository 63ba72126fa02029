pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::heatmap::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roster
        .route("/api/v1/people", get(handlers::handle_list_people))
        .route("/api/v1/people/:id", get(handlers::handle_get_person))
        .route(
            "/api/v1/people/:id/heatmap",
            get(handlers::handle_person_heatmap),
        )
        .route(
            "/api/v1/people/:id/scores",
            get(handlers::handle_person_scores),
        )
        // Skills and comparison
        .route("/api/v1/skills", get(handlers::handle_list_skills))
        .route("/api/v1/compare", post(handlers::handle_compare))
        .with_state(state)
}
