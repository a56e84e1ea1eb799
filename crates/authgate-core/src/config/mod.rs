//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field carries a default, so an empty source yields a
//! fully populated configuration; required settings are enforced by the
//! startup validation in [`validate`], not by the schema itself.

pub mod authn;
pub mod crypto;
pub mod logging;
pub mod password;
pub mod redis;
pub mod registry;
pub mod validate;

use serde::{Deserialize, Serialize};

use self::authn::AuthnConfig;
use self::logging::LoggingConfig;
use self::registry::TicketRegistryConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay) and
/// `AUTHGATE`-prefixed environment variables. It is constructed once at
/// startup and shared read-only for the life of the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Authentication handler settings.
    pub authn: AuthnConfig,
    /// Ticket registry backend settings.
    pub ticket_registry: TicketRegistryConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `AUTHGATE`. Missing files are
    /// not an error; the documented defaults fill every gap.
    pub fn load(env: &str) -> Result<Self, AppError> {
        tracing::debug!(env, "loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("AUTHGATE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
