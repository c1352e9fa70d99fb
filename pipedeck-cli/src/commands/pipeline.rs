//! Pipeline command handlers
//!
//! Listing, creation, deletion and deployment of pipeline records.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use pipedeck_client::PipedeckClient;
use pipedeck_core::domain::pipeline::{Pipeline, PipelineStatus};
use pipedeck_core::dto::pipeline::CreatePipeline;

use crate::config::Config;

/// Pipeline subcommands
#[derive(Subcommand)]
pub enum PipelineCommands {
    /// List all pipelines
    List,
    /// Create a new pipeline
    Create {
        /// Pipeline name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Free-form description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Pipeline template name (see `template list`)
        #[arg(short, long, default_value = "")]
        template: String,
    },
    /// Delete a pipeline
    Delete {
        /// Pipeline ID
        id: u64,
    },
    /// Deploy a pipeline, marking it active
    Deploy {
        /// Pipeline ID
        id: u64,
    },
}

/// Handle pipeline commands
pub async fn handle_pipeline_command(command: PipelineCommands, config: &Config) -> Result<()> {
    let client = PipedeckClient::new(&config.server_url);

    match command {
        PipelineCommands::List => list_pipelines(&client).await,
        PipelineCommands::Create {
            name,
            description,
            template,
        } => {
            let req = CreatePipeline {
                name,
                description,
                template,
            };
            create_pipeline(&client, &req).await
        }
        PipelineCommands::Delete { id } => delete_pipeline(&client, id).await,
        PipelineCommands::Deploy { id } => deploy_pipeline(&client, id).await,
    }
}

async fn list_pipelines(client: &PipedeckClient) -> Result<()> {
    let pipelines = client.list_pipelines().await?;

    if pipelines.is_empty() {
        println!("{}", "No pipelines found.".yellow());
    } else {
        println!("{}", format!("Found {} pipeline(s):", pipelines.len()).bold());
        println!();
        for pipeline in pipelines {
            print_pipeline_summary(&pipeline);
        }
    }

    Ok(())
}

async fn create_pipeline(client: &PipedeckClient, req: &CreatePipeline) -> Result<()> {
    let created = client.create_pipeline(req).await?;
    let pipeline = created.pipeline;

    println!("{}", "✓ Pipeline created successfully!".green().bold());
    println!("  ID:       {}", pipeline.id.to_string().cyan());
    println!("  Name:     {}", pipeline.name.bold());
    println!("  Template: {}", pipeline.template.dimmed());
    println!("  Status:   {}", colored_status(pipeline.status));

    Ok(())
}

async fn delete_pipeline(client: &PipedeckClient, id: u64) -> Result<()> {
    client.delete_pipeline(id).await?;

    println!("{}", format!("✓ Pipeline {} deleted", id).green().bold());

    Ok(())
}

async fn deploy_pipeline(client: &PipedeckClient, id: u64) -> Result<()> {
    client.deploy_pipeline(id).await?;

    println!("{}", format!("✓ Pipeline {} deployed", id).green().bold());

    Ok(())
}

fn colored_status(status: PipelineStatus) -> ColoredString {
    match status {
        PipelineStatus::Active => status.as_str().green(),
        PipelineStatus::Inactive => status.as_str().dimmed(),
    }
}

fn print_pipeline_summary(pipeline: &Pipeline) {
    println!(
        "  {} {} {}",
        "▸".cyan(),
        pipeline.name.bold(),
        format!("#{}", pipeline.id).dimmed()
    );
    println!("    Status:   {}", colored_status(pipeline.status));
    println!("    Template: {}", pipeline.template.dimmed());
    println!(
        "    Created:  {}",
        pipeline.created_at.format("%Y-%m-%d").to_string().dimmed()
    );
    if !pipeline.description.is_empty() {
        println!("    Description: {}", pipeline.description.dimmed());
    }
    println!();
}
