//! Template API Handlers
//!
//! Read-only endpoints over the static template catalog.

use axum::{Json, extract::State};
use pipedeck_core::domain::template::{NodeTemplate, PipelineTemplate};

use crate::state::AppState;

/// GET /api/templates
/// List pipeline templates
pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<PipelineTemplate>> {
    Json(state.catalog.pipeline_templates().to_vec())
}

/// GET /api/pipeline-templates
/// List node templates for the editor palette
pub async fn list_node_templates(State(state): State<AppState>) -> Json<Vec<NodeTemplate>> {
    Json(state.catalog.node_templates().to_vec())
}
