//! Pipeline endpoints

use crate::PipedeckClient;
use crate::error::Result;
use pipedeck_core::domain::pipeline::Pipeline;
use pipedeck_core::dto::SuccessResponse;
use pipedeck_core::dto::pipeline::{CreatePipeline, CreatePipelineResponse};

impl PipedeckClient {
    /// List all pipelines
    pub async fn list_pipelines(&self) -> Result<Vec<Pipeline>> {
        let response = self.client.get(self.url("/api/pipelines")).send().await?;

        self.handle_response(response).await
    }

    /// Create a new pipeline
    ///
    /// The server assigns the id, creation date and `inactive` status.
    pub async fn create_pipeline(&self, req: &CreatePipeline) -> Result<CreatePipelineResponse> {
        let response = self
            .client
            .post(self.url("/api/pipelines"))
            .json(req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a pipeline
    ///
    /// Succeeds even if no pipeline has this id.
    pub async fn delete_pipeline(&self, id: u64) -> Result<SuccessResponse> {
        let response = self
            .client
            .delete(self.url(&format!("/api/pipelines/{}", id)))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Deploy a pipeline, marking it active
    ///
    /// Succeeds even if no pipeline has this id.
    pub async fn deploy_pipeline(&self, id: u64) -> Result<SuccessResponse> {
        let response = self
            .client
            .post(self.url(&format!("/api/pipelines/{}/deploy", id)))
            .send()
            .await?;

        self.handle_response(response).await
    }
}
