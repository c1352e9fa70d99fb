//! Design Service
//!
//! Handles graphs submitted by the visual editor. Nothing is stored or
//! deployed: a design is logged and acknowledged as not persisted.

use pipedeck_core::domain::design::{DesignSummary, PipelineDesign};
use pipedeck_core::dto::design::DesignAck;
use serde_json::Value;

/// Accept a design for saving
pub fn save_design(payload: &Value) -> DesignAck {
    record("Saving", payload);
    DesignAck::not_persisted("Pipeline saved successfully")
}

/// Accept a design for deployment
pub fn deploy_design(payload: &Value) -> DesignAck {
    record("Deploying", payload);
    DesignAck::not_persisted("Pipeline deployed successfully")
}

/// Load the design of a pipeline
///
/// No design is ever kept, so every id yields an empty graph.
pub fn load_design(id: u64) -> PipelineDesign {
    tracing::debug!("Loading design for pipeline {}", id);
    PipelineDesign::empty()
}

fn record(action: &str, payload: &Value) {
    let summary = DesignSummary::of(payload);
    tracing::info!(
        "{} pipeline design: {} node(s), {} connection(s)",
        action,
        summary.nodes,
        summary.connections
    );
    tracing::debug!("{} pipeline design payload: {}", action, payload);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_and_deploy_are_not_persisted() {
        let payload = json!({"nodes": [{"id": "n1"}], "connections": []});

        let saved = save_design(&payload);
        assert!(saved.success);
        assert!(!saved.persisted);
        assert_eq!(saved.message, "Pipeline saved successfully");

        let deployed = deploy_design(&json!(null));
        assert!(deployed.success);
        assert!(!deployed.persisted);
        assert_eq!(deployed.message, "Pipeline deployed successfully");
    }

    #[test]
    fn test_load_design_is_always_empty() {
        assert_eq!(load_design(1), PipelineDesign::empty());
        assert_eq!(load_design(u64::MAX), PipelineDesign::empty());
    }
}
