//! API Module
//!
//! HTTP layer for the web application.
//! Each submodule handles endpoints for a specific domain.

pub mod design;
pub mod error;
pub mod health;
pub mod pages;
pub mod pipeline;
pub mod template;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the main router with all pages and API endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Pages
        .route("/", get(pages::index))
        .route("/dashboard", get(pages::dashboard))
        .route("/editor", get(pages::editor))
        .route("/editor/{name}", get(pages::editor_named))
        // Pipeline endpoints
        .route(
            "/api/pipelines",
            get(pipeline::list_pipelines).post(pipeline::create_pipeline),
        )
        .route("/api/pipelines/{id}", delete(pipeline::delete_pipeline))
        .route("/api/pipelines/{id}/deploy", post(pipeline::deploy_pipeline))
        // Template catalog endpoints
        .route("/api/templates", get(template::list_templates))
        .route("/api/pipeline-templates", get(template::list_node_templates))
        // Editor design endpoints
        .route("/api/pipeline-save", post(design::save_design))
        .route("/api/pipeline-deploy", post(design::deploy_design))
        .route("/api/pipeline/{id}", get(design::get_design))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
