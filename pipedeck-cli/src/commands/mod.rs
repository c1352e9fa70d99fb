//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod design;
mod pipeline;
mod template;

pub use design::DesignCommands;
pub use pipeline::PipelineCommands;
pub use template::TemplateCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Pipeline management
    Pipeline {
        #[command(subcommand)]
        command: PipelineCommands,
    },
    /// Template catalogs
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
    /// Editor designs
    Design {
        #[command(subcommand)]
        command: DesignCommands,
    },
}

/// Route a command to its handler module
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Pipeline { command } => pipeline::handle_pipeline_command(command, config).await,
        Commands::Template { command } => template::handle_template_command(command, config).await,
        Commands::Design { command } => design::handle_design_command(command, config).await,
    }
}
