//! Editor design endpoints

use crate::PipedeckClient;
use crate::error::Result;
use pipedeck_core::domain::design::PipelineDesign;
use pipedeck_core::dto::design::DesignAck;
use serde_json::Value;

impl PipedeckClient {
    /// Submit a design for saving
    ///
    /// Check `DesignAck::persisted`: the server accepts designs without
    /// keeping them.
    pub async fn save_design(&self, design: &Value) -> Result<DesignAck> {
        self.post_design("/api/pipeline-save", design).await
    }

    /// Submit a design for deployment
    pub async fn deploy_design(&self, design: &Value) -> Result<DesignAck> {
        self.post_design("/api/pipeline-deploy", design).await
    }

    /// Fetch the stored design of a pipeline
    pub async fn get_design(&self, id: u64) -> Result<PipelineDesign> {
        let response = self
            .client
            .get(self.url(&format!("/api/pipeline/{}", id)))
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn post_design(&self, path: &str, design: &Value) -> Result<DesignAck> {
        let response = self.client.post(self.url(path)).json(design).send().await?;

        self.handle_response(response).await
    }
}
