//! Pipeline DTOs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::pipeline::Pipeline;

/// Request to create a new pipeline
///
/// Every field is optional on the wire. A missing, `null` or non-string
/// field becomes an empty string instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePipeline {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub template: String,
}

/// Keep JSON strings, turn anything else into `""`
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default())
}

/// Response to a successful create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePipelineResponse {
    pub success: bool,
    pub pipeline: Pipeline,
}
