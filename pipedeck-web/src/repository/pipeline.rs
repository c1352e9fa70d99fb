//! Pipeline Repository
//!
//! In-memory store owning every pipeline record.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use pipedeck_core::domain::pipeline::{Pipeline, PipelineStatus};
use pipedeck_core::dto::pipeline::CreatePipeline;
use tokio::sync::RwLock;

/// Ordered collection of pipelines keyed by id
///
/// Ids are handed out under the write lock and only ever grow, so map order
/// is also insertion order and a deleted id is never assigned again.
#[derive(Debug, Default)]
pub struct PipelineStore {
    inner: RwLock<StoreState>,
}

#[derive(Debug, Default)]
struct StoreState {
    pipelines: BTreeMap<u64, Pipeline>,
    /// Highest id ever assigned
    last_id: u64,
}

impl PipelineStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given records
    ///
    /// A later record with the same id replaces an earlier one.
    pub fn with_pipelines(pipelines: impl IntoIterator<Item = Pipeline>) -> Self {
        let pipelines: BTreeMap<u64, Pipeline> = pipelines.into_iter().map(|p| (p.id, p)).collect();
        let last_id = pipelines.keys().next_back().copied().unwrap_or(0);

        Self {
            inner: RwLock::new(StoreState { pipelines, last_id }),
        }
    }

    /// Create a store preloaded with the demo pipelines
    pub fn seeded() -> Result<Self, chrono::ParseError> {
        Ok(Self::with_pipelines(demo_pipelines()?))
    }

    /// List all pipelines in insertion order
    pub async fn list_all(&self) -> Vec<Pipeline> {
        self.inner.read().await.pipelines.values().cloned().collect()
    }

    /// Append a new inactive pipeline created on `created_at`
    pub async fn create(&self, req: CreatePipeline, created_at: NaiveDate) -> Pipeline {
        let mut state = self.inner.write().await;

        let id = state.last_id + 1;
        state.last_id = id;

        let pipeline = Pipeline {
            id,
            name: req.name,
            description: req.description,
            status: PipelineStatus::Inactive,
            template: req.template,
            created_at,
        };

        state.pipelines.insert(id, pipeline.clone());

        pipeline
    }

    /// Delete a pipeline by ID
    ///
    /// Returns whether a record was removed.
    pub async fn delete(&self, id: u64) -> bool {
        self.inner.write().await.pipelines.remove(&id).is_some()
    }

    /// Mark a pipeline as active
    ///
    /// Returns whether a record matched.
    pub async fn activate(&self, id: u64) -> bool {
        match self.inner.write().await.pipelines.get_mut(&id) {
            Some(pipeline) => {
                pipeline.status = PipelineStatus::Active;
                true
            }
            None => false,
        }
    }
}

/// Pipelines shown on a fresh demo instance
pub fn demo_pipelines() -> Result<Vec<Pipeline>, chrono::ParseError> {
    Ok(vec![
        demo(
            1,
            "ML Model Training Pipeline",
            "Automated training pipeline for machine learning models",
            PipelineStatus::Active,
            "MLOps Training",
            "2024-01-15",
        )?,
        demo(
            2,
            "Data Processing Pipeline",
            "ETL pipeline for data warehouse operations",
            PipelineStatus::Inactive,
            "Data Engineering",
            "2024-01-10",
        )?,
        demo(
            3,
            "CI/CD Deployment Pipeline",
            "Continuous integration and deployment pipeline",
            PipelineStatus::Active,
            "DevOps CI/CD",
            "2024-01-08",
        )?,
    ])
}

fn demo(
    id: u64,
    name: &str,
    description: &str,
    status: PipelineStatus,
    template: &str,
    created_at: &str,
) -> Result<Pipeline, chrono::ParseError> {
    Ok(Pipeline {
        id,
        name: name.to_string(),
        description: description.to_string(),
        status,
        template: template.to_string(),
        created_at: NaiveDate::parse_from_str(created_at, "%Y-%m-%d")?,
    })
}
