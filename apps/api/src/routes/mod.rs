pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::archive::handlers as archive_handlers;
use crate::extraction::handlers as extraction_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/analyses", get(archive_handlers::handle_list_analyses))
        .route("/analyses/:id", get(archive_handlers::handle_get_analysis))
        .route(
            "/parse-resume",
            post(extraction_handlers::handle_parse_resume),
        )
        .with_state(state)
}
