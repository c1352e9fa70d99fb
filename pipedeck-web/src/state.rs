//! Shared application state handed to every handler.

use std::sync::Arc;

use pipedeck_core::catalog::TemplateCatalog;

use crate::pages::Pages;
use crate::repository::PipelineStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PipelineStore>,
    pub catalog: Arc<TemplateCatalog>,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(store: PipelineStore, catalog: TemplateCatalog, pages: Pages) -> Self {
        Self {
            store: Arc::new(store),
            catalog: Arc::new(catalog),
            pages: Arc::new(pages),
        }
    }
}
