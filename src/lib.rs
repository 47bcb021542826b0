pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod skills;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the full application router over the given state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route("/health", get(handlers::health_check))
        .route(
            "/api/v1/skills",
            get(handlers::list_skills).post(handlers::create_skill),
        )
        .route(
            "/api/v1/skills/{key}",
            get(handlers::get_skill)
                .put(handlers::replace_skill)
                .delete(handlers::delete_skill),
        )
        .route(
            "/api/v1/skills/{key}/actions/name",
            patch(handlers::patch_name),
        )
        .route(
            "/api/v1/skills/{key}/actions/description",
            patch(handlers::patch_description),
        )
        .route(
            "/api/v1/skills/{key}/actions/logo",
            patch(handlers::patch_logo),
        )
        .route(
            "/api/v1/skills/{key}/actions/tags",
            patch(handlers::patch_tags),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
