//! Editor design graphs
//!
//! The editor submits `{nodes, connections}` graphs. They are accepted as raw
//! JSON and never interpreted beyond counting their parts for logs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Node/connection graph produced by the visual editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineDesign {
    #[serde(default)]
    pub nodes: Vec<Value>,
    #[serde(default)]
    pub connections: Vec<Value>,
}

impl PipelineDesign {
    /// Design with no nodes and no connections
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Size of a submitted design, as far as it can be told from the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DesignSummary {
    pub nodes: usize,
    pub connections: usize,
}

impl DesignSummary {
    /// Count `nodes` and `connections` entries of an arbitrary payload.
    /// Anything that is not an array counts as zero.
    pub fn of(payload: &Value) -> Self {
        let count = |key: &str| payload.get(key).and_then(Value::as_array).map_or(0, Vec::len);

        Self {
            nodes: count("nodes"),
            connections: count("connections"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_counts_arrays() {
        let payload = json!({
            "nodes": [{"id": "node-1"}, {"id": "node-2"}],
            "connections": [{"from": "node-1", "to": "node-2"}]
        });

        assert_eq!(
            DesignSummary::of(&payload),
            DesignSummary {
                nodes: 2,
                connections: 1
            }
        );
    }

    #[test]
    fn test_summary_tolerates_arbitrary_payloads() {
        assert_eq!(DesignSummary::of(&json!("hello")), DesignSummary::default());
        assert_eq!(
            DesignSummary::of(&json!({"nodes": "not-a-list"})),
            DesignSummary::default()
        );
    }

    #[test]
    fn test_empty_design_serializes_both_lists() {
        let value = serde_json::to_value(PipelineDesign::empty()).unwrap();
        assert_eq!(value, json!({"nodes": [], "connections": []}));
    }
}
