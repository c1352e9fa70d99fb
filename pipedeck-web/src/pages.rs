//! HTML pages
//!
//! Browser-facing pages rendered with minijinja. Templates are embedded in
//! the binary and compiled once at startup.

use minijinja::{Environment, context};
use pipedeck_core::domain::pipeline::Pipeline;
use pipedeck_core::domain::template::PipelineTemplate;

/// Compiled page templates
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    /// Compile the embedded templates
    pub fn load() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../templates/base.html"))?;
        env.add_template("index.html", include_str!("../templates/index.html"))?;
        env.add_template("dashboard.html", include_str!("../templates/dashboard.html"))?;
        env.add_template("editor.html", include_str!("../templates/editor.html"))?;

        Ok(Self { env })
    }

    /// Landing page
    pub fn index(&self) -> Result<String, minijinja::Error> {
        self.env.get_template("index.html")?.render(context! {})
    }

    /// Dashboard listing every pipeline
    pub fn dashboard(
        &self,
        pipelines: &[Pipeline],
        templates: &[PipelineTemplate],
    ) -> Result<String, minijinja::Error> {
        self.env
            .get_template("dashboard.html")?
            .render(context! { pipelines => pipelines, templates => templates })
    }

    /// Visual editor, optionally pre-seeded with a pipeline name
    pub fn editor(&self, pipeline_name: Option<&str>) -> Result<String, minijinja::Error> {
        self.env
            .get_template("editor.html")?
            .render(context! { pipeline_name => pipeline_name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::pipeline_repository::demo_pipelines;

    #[test]
    fn test_dashboard_lists_pipelines() {
        let pages = Pages::load().unwrap();
        let templates = vec![PipelineTemplate {
            name: "API Testing".to_string(),
            description: "Automated API testing and validation".to_string(),
        }];

        let html = pages.dashboard(&demo_pipelines().unwrap(), &templates).unwrap();

        assert!(html.contains("ML Model Training Pipeline"));
        assert!(html.contains("Data Processing Pipeline"));
        assert!(html.contains("2024-01-08"));
        assert!(html.contains("inactive"));
        assert!(html.contains("API Testing"));
        assert!(html.contains("/editor?id=2"));
    }

    #[test]
    fn test_dashboard_without_pipelines() {
        let pages = Pages::load().unwrap();
        let html = pages.dashboard(&[], &[]).unwrap();
        assert!(html.contains("No pipelines yet"));
    }

    #[test]
    fn test_editor_escapes_name() {
        let pages = Pages::load().unwrap();

        let html = pages.editor(Some("<script>x</script>")).unwrap();
        assert!(html.contains("&lt;script&gt;x&lt;"));
        assert!(!html.contains("<script>x</script>"));

        let html = pages.editor(None).unwrap();
        assert!(html.contains("Untitled pipeline"));
    }

    #[test]
    fn test_editor_loads_stored_design() {
        let html = Pages::load().unwrap().editor(None).unwrap();
        assert!(html.contains("fetch(`/api/pipeline/${pipelineId}`)"));
        assert!(html.contains("design.connections.push"));
    }

    #[test]
    fn test_index_renders() {
        let html = Pages::load().unwrap().index().unwrap();
        assert!(html.contains("Pipedeck"));
    }
}
