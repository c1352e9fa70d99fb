//! Pipedeck Web
//!
//! Dashboard and visual-editor backend for pipeline records.
//!
//! Architecture:
//! - Configuration: settings from environment or defaults
//! - Repository: in-memory pipeline store
//! - Services: pipeline and design logic
//! - API: axum handlers for pages and JSON endpoints

use anyhow::{Context, Result};
use pipedeck_core::catalog::TemplateCatalog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;
pub mod config;
pub mod pages;
pub mod repository;
pub mod service;
pub mod state;

use crate::config::Config;
use crate::pages::Pages;
use crate::repository::PipelineStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pipedeck_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pipedeck Web...");

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let catalog = TemplateCatalog::load().context("Failed to parse template catalog")?;
    tracing::info!(
        "Loaded {} pipeline template(s) and {} node template(s)",
        catalog.pipeline_templates().len(),
        catalog.node_templates().len()
    );

    let pages = Pages::load().context("Failed to compile page templates")?;

    let store = if config.seed_demo_data {
        tracing::info!("Seeding store with demo pipelines");
        PipelineStore::seeded().context("Invalid demo seed data")?
    } else {
        PipelineStore::new()
    };

    // Build router with all pages and API endpoints
    let app = api::create_router(AppState::new(store, catalog, pages));

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
