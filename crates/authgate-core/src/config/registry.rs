//! Ticket registry backend configuration.

use serde::{Deserialize, Serialize};

use super::crypto::CryptoConfig;
use super::redis::RedisConfig;

/// Top-level ticket registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRegistryConfig {
    /// Registry provider: `"memory"`, `"redis"`, or `"queue"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Message-queue registry settings.
    #[serde(default)]
    pub queue: QueueRegistryConfig,
    /// Redis registry settings.
    #[serde(default)]
    pub redis: RedisConfig,
}

impl Default for TicketRegistryConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            queue: QueueRegistryConfig::default(),
            redis: RedisConfig::default(),
        }
    }
}

/// Message-queue ticket registry configuration.
///
/// Registry entries are replicated between server nodes over a message
/// broker and are signed and encrypted in transit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueRegistryConfig {
    /// Crypto settings protecting registry entries in transit.
    #[serde(default)]
    pub crypto: CryptoConfig,
}

fn default_provider() -> String {
    "memory".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_defaults() {
        let registry = TicketRegistryConfig::default();
        assert_eq!(registry.provider, "memory");
        assert!(registry.queue.crypto.enabled);
        assert_eq!(registry.redis.host, "localhost");
    }
}
