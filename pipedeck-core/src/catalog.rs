//! Template catalog
//!
//! Static template data embedded in the binary. The catalog is parsed once at
//! startup and only read afterwards.

use crate::domain::template::{NodeTemplate, PipelineTemplate};

const PIPELINE_TEMPLATES: &str = include_str!("../catalog/pipeline_templates.json");
const NODE_TEMPLATES: &str = include_str!("../catalog/node_templates.json");

/// Read-only collection of pipeline and node templates
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    pipeline_templates: Vec<PipelineTemplate>,
    node_templates: Vec<NodeTemplate>,
}

impl TemplateCatalog {
    /// Parse the embedded catalog data
    pub fn load() -> Result<Self, serde_json::Error> {
        Ok(Self {
            pipeline_templates: serde_json::from_str(PIPELINE_TEMPLATES)?,
            node_templates: serde_json::from_str(NODE_TEMPLATES)?,
        })
    }

    /// Pipeline templates in catalog order
    pub fn pipeline_templates(&self) -> &[PipelineTemplate] {
        &self.pipeline_templates
    }

    /// Node templates in palette order
    pub fn node_templates(&self) -> &[NodeTemplate] {
        &self.node_templates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::{ConfigField, NodeCategory};

    fn node<'a>(catalog: &'a TemplateCatalog, id: &str) -> Option<&'a NodeTemplate> {
        catalog.node_templates().iter().find(|t| t.id == id)
    }

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = TemplateCatalog::load().unwrap();
        assert_eq!(catalog.pipeline_templates().len(), 5);
        assert_eq!(catalog.pipeline_templates()[0].name, "MLOps Training");
    }

    #[test]
    fn test_node_template_ids_are_stable() {
        let catalog = TemplateCatalog::load().unwrap();
        let ids: Vec<&str> = catalog
            .node_templates()
            .iter()
            .map(|t| t.id.as_str())
            .collect();

        assert_eq!(
            ids,
            [
                "data-source",
                "data-transform",
                "ml-training",
                "model-validation",
                "deployment",
                "monitoring",
                "notification",
                "data-validation",
            ]
        );
    }

    #[test]
    fn test_node_template_arity_and_config() {
        let catalog = TemplateCatalog::load().unwrap();

        let source = node(&catalog, "data-source").unwrap();
        assert_eq!((source.inputs, source.outputs), (0, 1));
        assert_eq!(source.category, NodeCategory::Data);
        assert!(matches!(
            source.config.get("type"),
            Some(ConfigField::Select { options }) if options.len() == 5
        ));

        let validation = node(&catalog, "model-validation").unwrap();
        assert_eq!((validation.inputs, validation.outputs), (2, 1));
        assert_eq!(
            validation.config.get("threshold"),
            Some(&ConfigField::Number {
                placeholder: "Acceptance threshold".to_string()
            })
        );

        let notification = node(&catalog, "notification").unwrap();
        assert_eq!(notification.outputs, 0);

        assert!(node(&catalog, "does-not-exist").is_none());
    }
}
