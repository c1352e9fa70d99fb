//! Design API Handlers
//!
//! Endpoints used by the visual editor. Submitted designs are acknowledged
//! with `202 Accepted` since they are never persisted.

use axum::{
    Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
};
use pipedeck_core::domain::design::PipelineDesign;
use pipedeck_core::dto::design::DesignAck;
use serde_json::Value;

use crate::api::error::ApiResult;
use crate::service::design_service;

/// POST /api/pipeline-save
/// Accept an editor design for saving
pub async fn save_design(
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DesignAck>)> {
    let Json(design) = payload?;

    Ok((StatusCode::ACCEPTED, Json(design_service::save_design(&design))))
}

/// POST /api/pipeline-deploy
/// Accept an editor design for deployment
pub async fn deploy_design(
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DesignAck>)> {
    let Json(design) = payload?;

    Ok((StatusCode::ACCEPTED, Json(design_service::deploy_design(&design))))
}

/// GET /api/pipeline/{id}
/// Get the editor design of a pipeline
pub async fn get_design(Path(id): Path<u64>) -> Json<PipelineDesign> {
    Json(design_service::load_design(id))
}
