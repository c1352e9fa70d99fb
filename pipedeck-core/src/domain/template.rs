//! Template descriptors
//!
//! Two kinds of static metadata: coarse pipeline templates shown on the
//! dashboard, and node templates that populate the editor palette.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pipeline template (category of pipeline a user can start from)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineTemplate {
    pub name: String,
    pub description: String,
}

/// Draggable node type for the visual editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTemplate {
    /// Stable key, e.g. `data-source`
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: NodeCategory,
    pub icon: String,
    /// Number of input ports
    pub inputs: u32,
    /// Number of output ports
    pub outputs: u32,
    /// Field name to field descriptor
    pub config: BTreeMap<String, ConfigField>,
}

/// Palette category of a node template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Data,
    Processing,
    Ml,
    Deployment,
    Monitoring,
}

/// Configuration field shown in the editor's properties panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConfigField {
    Select { options: Vec<String> },
    Text { placeholder: String },
    Textarea { placeholder: String },
    Number { placeholder: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_field_uses_type_tag() {
        let field = ConfigField::Select {
            options: vec!["JSON".to_string(), "CSV".to_string()],
        };

        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["type"], "select");
        assert_eq!(value["options"][1], "CSV");

        let parsed: ConfigField =
            serde_json::from_str(r#"{"type":"number","placeholder":"Alert threshold"}"#).unwrap();
        assert_eq!(
            parsed,
            ConfigField::Number {
                placeholder: "Alert threshold".to_string()
            }
        );
    }
}
