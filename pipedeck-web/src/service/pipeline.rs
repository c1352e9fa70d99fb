//! Pipeline Service
//!
//! Business logic for pipeline management.
//!
//! Unknown ids are not an error: deleting or deploying a pipeline that does
//! not exist leaves the store untouched and still succeeds.

use chrono::{Local, NaiveDate};
use pipedeck_core::domain::pipeline::Pipeline;
use pipedeck_core::dto::pipeline::CreatePipeline;

use crate::repository::PipelineStore;

/// List all pipelines
pub async fn list_pipelines(store: &PipelineStore) -> Vec<Pipeline> {
    store.list_all().await
}

/// Create a new pipeline stamped with today's local date
pub async fn create_pipeline(store: &PipelineStore, req: CreatePipeline) -> Pipeline {
    create_pipeline_on(store, req, today()).await
}

async fn create_pipeline_on(
    store: &PipelineStore,
    req: CreatePipeline,
    created_at: NaiveDate,
) -> Pipeline {
    let pipeline = store.create(req, created_at).await;

    tracing::info!("Pipeline created: {} ({})", pipeline.name, pipeline.id);

    pipeline
}

/// Delete a pipeline
pub async fn delete_pipeline(store: &PipelineStore, id: u64) {
    if store.delete(id).await {
        tracing::info!("Pipeline deleted: {}", id);
    } else {
        tracing::warn!("Delete requested for unknown pipeline {}, nothing removed", id);
    }
}

/// Deploy a pipeline, marking it active
pub async fn deploy_pipeline(store: &PipelineStore, id: u64) {
    if store.activate(id).await {
        tracing::info!("Pipeline deployed: {}", id);
    } else {
        tracing::warn!("Deploy requested for unknown pipeline {}, nothing changed", id);
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipedeck_core::domain::pipeline::PipelineStatus;

    #[tokio::test]
    async fn test_create_stamps_given_date() {
        let store = PipelineStore::new();
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

        let pipeline = create_pipeline_on(&store, CreatePipeline::default(), date).await;

        assert_eq!(pipeline.created_at, date);
        assert_eq!(list_pipelines(&store).await, vec![pipeline]);
    }

    #[tokio::test]
    async fn test_create_uses_today() {
        let store = PipelineStore::new();
        let before = today();

        let pipeline = create_pipeline(&store, CreatePipeline::default()).await;

        assert!(pipeline.created_at >= before);
        assert!(pipeline.created_at <= today());
    }

    #[tokio::test]
    async fn test_deploy_then_delete() {
        let store = PipelineStore::new();
        let pipeline = create_pipeline(&store, CreatePipeline::default()).await;

        deploy_pipeline(&store, pipeline.id).await;
        assert_eq!(list_pipelines(&store).await[0].status, PipelineStatus::Active);

        delete_pipeline(&store, pipeline.id).await;
        assert!(list_pipelines(&store).await.is_empty());

        // Both are silent no-ops once the record is gone
        deploy_pipeline(&store, pipeline.id).await;
        delete_pipeline(&store, pipeline.id).await;
        assert!(list_pipelines(&store).await.is_empty());
    }
}
