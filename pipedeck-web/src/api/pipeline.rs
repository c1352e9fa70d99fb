//! Pipeline API Handlers
//!
//! HTTP endpoints for pipeline management.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use pipedeck_core::domain::pipeline::Pipeline;
use pipedeck_core::dto::SuccessResponse;
use pipedeck_core::dto::pipeline::{CreatePipeline, CreatePipelineResponse};

use crate::api::error::ApiResult;
use crate::service::pipeline_service;
use crate::state::AppState;

/// GET /api/pipelines
/// List all pipelines
pub async fn list_pipelines(State(state): State<AppState>) -> Json<Vec<Pipeline>> {
    tracing::debug!("Listing all pipelines");

    Json(pipeline_service::list_pipelines(&state.store).await)
}

/// POST /api/pipelines
/// Create a new pipeline
pub async fn create_pipeline(
    State(state): State<AppState>,
    payload: Result<Json<CreatePipeline>, JsonRejection>,
) -> ApiResult<Json<CreatePipelineResponse>> {
    let Json(req) = payload?;
    tracing::info!("Creating pipeline: {}", req.name);

    let pipeline = pipeline_service::create_pipeline(&state.store, req).await;

    Ok(Json(CreatePipelineResponse {
        success: true,
        pipeline,
    }))
}

/// DELETE /api/pipelines/{id}
/// Delete a pipeline
pub async fn delete_pipeline(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<SuccessResponse> {
    tracing::info!("Deleting pipeline: {}", id);

    pipeline_service::delete_pipeline(&state.store, id).await;

    Json(SuccessResponse::ok())
}

/// POST /api/pipelines/{id}/deploy
/// Mark a pipeline as active
pub async fn deploy_pipeline(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<SuccessResponse> {
    tracing::info!("Deploying pipeline: {}", id);

    pipeline_service::deploy_pipeline(&state.store, id).await;

    Json(SuccessResponse::ok())
}
