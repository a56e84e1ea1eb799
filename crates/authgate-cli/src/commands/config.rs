//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use authgate_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective merged configuration
    Show,
    /// Check required settings, listing every violation at once
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(env)?;
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => {
            let config = super::load_config(env)?;
            let violations = config.missing_required();
            if !violations.is_empty() {
                output::print_error(&format!(
                    "Configuration '{}' has {} invalid setting(s):",
                    env,
                    violations.len()
                ));
                for violation in &violations {
                    output::print_kv(&violation.path, &violation.message);
                }
                return Err(AppError::configuration(format!(
                    "{} required setting(s) missing or invalid",
                    violations.len()
                )));
            }

            output::print_success(&format!("Configuration '{}' is valid", env));
            output::print_kv("Ticket registry", &config.ticket_registry.provider);
            if config.ticket_registry.provider == "redis" {
                let redis = &config.ticket_registry.redis;
                output::print_kv(
                    "Redis",
                    &format!("{}:{} db {}", redis.host, redis.port, redis.database),
                );
            }
            match &config.authn.file {
                Some(file) => output::print_kv(
                    "File authn",
                    &format!(
                        "{} (encoder: {})",
                        file.filename.display(),
                        file.password_encoder.kind
                    ),
                ),
                None => output::print_kv("File authn", "not configured"),
            }
            output::print_kv("Logging", &config.logging.level);
        }
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            tokio::fs::write(out_path, default_config).await?;

            output::print_success(&format!("Default config written to '{}'", out_path));
        }
    }

    Ok(())
}
