//! Server configuration
//!
//! Settings for the web application, read from the environment with
//! defaults suitable for local development.

use std::net::SocketAddr;

/// Web application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Start the store with the demo pipelines
    pub seed_demo_data: bool,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(bind_addr: String) -> Self {
        Self {
            bind_addr,
            seed_demo_data: true,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PIPEDECK_BIND_ADDR (optional, default: 0.0.0.0:5000)
    /// - PIPEDECK_SEED_DEMO_DATA (optional, true/false, default: true)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("PIPEDECK_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        let seed_demo_data = match std::env::var("PIPEDECK_SEED_DEMO_DATA") {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                anyhow::anyhow!("PIPEDECK_SEED_DEMO_DATA must be true or false, got `{value}`")
            })?,
            Err(_) => true,
        };

        Ok(Self {
            bind_addr,
            seed_demo_data,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.bind_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!("bind_addr must be a socket address such as 0.0.0.0:5000");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("0.0.0.0:5000".to_string())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
