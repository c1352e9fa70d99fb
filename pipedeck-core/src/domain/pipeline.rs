//! Pipeline domain types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline record
///
/// A named workflow entry managed through the dashboard. Nothing is executed;
/// `status` only reflects whether the record has been deployed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub status: PipelineStatus,
    pub template: String,
    /// Creation date, serialized as `YYYY-MM-DD`
    pub created_at: NaiveDate,
}

/// Deployment status of a pipeline
///
/// New pipelines start `Inactive`. Deploying moves them to `Active`;
/// there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStatus {
    Active,
    #[default]
    Inactive,
}

impl PipelineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStatus::Active => "active",
            PipelineStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_serializes_flat_date_and_lowercase_status() {
        let pipeline = Pipeline {
            id: 7,
            name: "Nightly ETL".to_string(),
            description: String::new(),
            status: PipelineStatus::Inactive,
            template: "Data Engineering".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        };

        let value = serde_json::to_value(&pipeline).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["status"], "inactive");
        assert_eq!(value["created_at"], "2024-01-10");
    }

    #[test]
    fn test_status_defaults_to_inactive() {
        assert_eq!(PipelineStatus::default(), PipelineStatus::Inactive);
        assert_eq!(PipelineStatus::Active.to_string(), "active");
    }
}
