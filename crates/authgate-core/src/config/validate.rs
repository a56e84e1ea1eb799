//! Startup validation of required settings.
//!
//! The schema itself performs no validation; this module is the startup
//! collaborator that checks every required setting in one pass and
//! reports all violations together, before any connection or handler is
//! constructed from the configuration.

use std::fmt;

use super::AppConfig;
use crate::error::AppError;

/// Registry provider names accepted by
/// [`TicketRegistryConfig::provider`](super::registry::TicketRegistryConfig).
pub const REGISTRY_PROVIDERS: [&str; 3] = ["memory", "redis", "queue"];

/// A single violation discovered during configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ConfigViolation {
    /// Dotted path of the offending setting.
    pub path: String,
    /// What is wrong with it.
    pub message: String,
}

impl ConfigViolation {
    fn missing(path: &str) -> Self {
        Self {
            path: path.to_string(),
            message: "required setting is not set".to_string(),
        }
    }

    fn invalid(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl AppConfig {
    /// Collect every missing or invalid required setting.
    ///
    /// Required settings are only enforced for sections that are actually
    /// in use: an absent optional section is not a violation, and
    /// representable-but-unusual numeric values (negative pool sentinels,
    /// negative database index) are passed through untouched.
    pub fn missing_required(&self) -> Vec<ConfigViolation> {
        let mut violations = Vec::new();

        if let Some(file) = &self.authn.file {
            if file.filename.as_os_str().is_empty() {
                violations.push(ConfigViolation::missing("authn.file.filename"));
            }
        }

        let registry = &self.ticket_registry;
        if !REGISTRY_PROVIDERS.contains(&registry.provider.as_str()) {
            violations.push(ConfigViolation::invalid(
                "ticket_registry.provider",
                format!("unknown provider '{}'", registry.provider),
            ));
        }

        if registry.provider == "redis" {
            let redis = &registry.redis;
            if redis.host.is_empty() {
                violations.push(ConfigViolation::missing("ticket_registry.redis.host"));
            }
            if redis.port == 0 {
                violations.push(ConfigViolation::missing("ticket_registry.redis.port"));
            }
            match &redis.password {
                Some(password) if !password.is_empty() => {}
                _ => violations.push(ConfigViolation::missing("ticket_registry.redis.password")),
            }
            if let Some(sentinel) = &redis.sentinel {
                if sentinel.master.as_deref().unwrap_or("").is_empty() {
                    violations.push(ConfigViolation::missing(
                        "ticket_registry.redis.sentinel.master",
                    ));
                }
                if sentinel.nodes.is_empty() {
                    violations.push(ConfigViolation::missing(
                        "ticket_registry.redis.sentinel.nodes",
                    ));
                }
            }
        }

        violations
    }

    /// Validate required settings, failing with a single error that lists
    /// every violation rather than just the first.
    pub fn validate(&self) -> Result<(), AppError> {
        let violations = self.missing_required();
        if violations.is_empty() {
            return Ok(());
        }

        let listing = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(AppError::configuration(format!(
            "{} invalid setting(s): {listing}",
            violations.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::authn::FileAuthnConfig;
    use crate::config::redis::RedisSentinelConfig;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.missing_required().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_redis_provider_without_password() {
        let mut config = AppConfig::default();
        config.ticket_registry.provider = "redis".to_string();

        let violations = config.missing_required();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "ticket_registry.redis.password");
    }

    #[test]
    fn test_empty_password_counts_as_missing() {
        let mut config = AppConfig::default();
        config.ticket_registry.provider = "redis".to_string();
        config.ticket_registry.redis.password = Some(String::new());

        let violations = config.missing_required();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "ticket_registry.redis.password");
    }

    #[test]
    fn test_memory_provider_skips_redis_checks() {
        let config = AppConfig::default();
        assert_eq!(config.ticket_registry.provider, "memory");
        assert!(config.missing_required().is_empty());
    }

    #[test]
    fn test_all_violations_reported_together() {
        let mut config = AppConfig::default();
        config.ticket_registry.provider = "redis".to_string();
        config.ticket_registry.redis.host = String::new();
        config.ticket_registry.redis.sentinel = Some(RedisSentinelConfig::default());
        config.authn.file = Some(FileAuthnConfig::default());

        let violations = config.missing_required();
        let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "authn.file.filename",
                "ticket_registry.redis.host",
                "ticket_registry.redis.password",
                "ticket_registry.redis.sentinel.master",
                "ticket_registry.redis.sentinel.nodes",
            ]
        );

        let err = config.validate().unwrap_err();
        assert!(err.message.contains("5 invalid setting(s)"));
        assert!(err.message.contains("ticket_registry.redis.password"));
    }

    #[test]
    fn test_unknown_provider_is_reported() {
        let mut config = AppConfig::default();
        config.ticket_registry.provider = "memcached".to_string();

        let violations = config.missing_required();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "ticket_registry.provider");
        assert!(violations[0].message.contains("memcached"));
    }
}
