//! Template catalog endpoints

use crate::PipedeckClient;
use crate::error::Result;
use pipedeck_core::domain::template::{NodeTemplate, PipelineTemplate};

impl PipedeckClient {
    /// List pipeline templates
    pub async fn list_templates(&self) -> Result<Vec<PipelineTemplate>> {
        let response = self.client.get(self.url("/api/templates")).send().await?;

        self.handle_response(response).await
    }

    /// List node templates used by the editor palette
    pub async fn list_node_templates(&self) -> Result<Vec<NodeTemplate>> {
        let response = self
            .client
            .get(self.url("/api/pipeline-templates"))
            .send()
            .await?;

        self.handle_response(response).await
    }
}
