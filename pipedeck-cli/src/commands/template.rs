//! Template command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use pipedeck_client::PipedeckClient;
use pipedeck_core::domain::template::ConfigField;

use crate::config::Config;

/// Template subcommands
#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List pipeline templates
    List,
    /// List node templates available in the editor
    Nodes,
}

/// Handle template commands
pub async fn handle_template_command(command: TemplateCommands, config: &Config) -> Result<()> {
    let client = PipedeckClient::new(&config.server_url);

    match command {
        TemplateCommands::List => list_templates(&client).await,
        TemplateCommands::Nodes => list_node_templates(&client).await,
    }
}

async fn list_templates(client: &PipedeckClient) -> Result<()> {
    for template in client.list_templates().await? {
        println!("  {} {}", "▸".cyan(), template.name.bold());
        println!("    {}", template.description.dimmed());
    }

    Ok(())
}

async fn list_node_templates(client: &PipedeckClient) -> Result<()> {
    for node in client.list_node_templates().await? {
        println!(
            "  {} {} {} {}",
            node.icon,
            node.name.bold(),
            format!("({})", node.id).cyan(),
            format!("{} in / {} out", node.inputs, node.outputs).dimmed()
        );
        println!("    {}", node.description.dimmed());
        for (field, descriptor) in &node.config {
            println!("    - {}: {}", field, describe_field(descriptor).dimmed());
        }
    }

    Ok(())
}

fn describe_field(field: &ConfigField) -> String {
    match field {
        ConfigField::Select { options } => format!("select [{}]", options.join(", ")),
        ConfigField::Text { placeholder } => format!("text ({})", placeholder),
        ConfigField::Textarea { placeholder } => format!("textarea ({})", placeholder),
        ConfigField::Number { placeholder } => format!("number ({})", placeholder),
    }
}
