//! Design command handlers
//!
//! Submit editor designs from JSON files and inspect stored designs.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use pipedeck_client::PipedeckClient;
use pipedeck_core::dto::design::DesignAck;
use serde_json::Value;

use crate::config::Config;

/// Design subcommands
#[derive(Subcommand)]
pub enum DesignCommands {
    /// Show the design stored for a pipeline
    Get {
        /// Pipeline ID
        id: u64,
    },
    /// Save a design from a JSON file
    Save {
        /// Path to a `{nodes, connections}` JSON file
        file: String,
    },
    /// Deploy a design from a JSON file
    Deploy {
        /// Path to a `{nodes, connections}` JSON file
        file: String,
    },
}

/// Handle design commands
pub async fn handle_design_command(command: DesignCommands, config: &Config) -> Result<()> {
    let client = PipedeckClient::new(&config.server_url);

    match command {
        DesignCommands::Get { id } => {
            let design = client.get_design(id).await?;
            println!("{}", serde_json::to_string_pretty(&design)?);
            Ok(())
        }
        DesignCommands::Save { file } => {
            let design = read_design(&file)?;
            print_ack(&client.save_design(&design).await?);
            Ok(())
        }
        DesignCommands::Deploy { file } => {
            let design = read_design(&file)?;
            print_ack(&client.deploy_design(&design).await?);
            Ok(())
        }
    }
}

fn read_design(path: &str) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read design file: {}", path))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Design file is not valid JSON: {}", path))
}

fn print_ack(ack: &DesignAck) {
    println!("{}", format!("✓ {}", ack.message).green().bold());
    if !ack.persisted {
        println!("  {}", "The server accepted the design but did not store it.".yellow());
    }
}
