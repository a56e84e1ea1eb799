//! CLI command definitions and dispatch.

pub mod config;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use authgate_core::error::AppError;

/// AuthGate central authentication server administration
#[derive(Debug, Parser)]
#[command(name = "authgate", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects the config/{env}.toml overlay)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Config(args) => config::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: load the merged configuration for the selected environment
pub fn load_config(env: &str) -> Result<authgate_core::config::AppConfig, AppError> {
    authgate_core::config::AppConfig::load(env)
}
