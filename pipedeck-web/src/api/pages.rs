//! Page Handlers
//!
//! Browser navigation routes rendering HTML.

use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::api::error::ApiResult;
use crate::service::pipeline_service;
use crate::state::AppState;

/// GET /
pub async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    Ok(Html(state.pages.index()?))
}

/// GET /dashboard
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let pipelines = pipeline_service::list_pipelines(&state.store).await;
    let html = state
        .pages
        .dashboard(&pipelines, state.catalog.pipeline_templates())?;

    Ok(Html(html))
}

/// GET /editor
pub async fn editor(State(state): State<AppState>) -> ApiResult<Html<String>> {
    Ok(Html(state.pages.editor(None)?))
}

/// GET /editor/{name}
pub async fn editor_named(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Html<String>> {
    Ok(Html(state.pages.editor(Some(&name))?))
}
