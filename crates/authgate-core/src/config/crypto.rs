//! Signing and encryption sub-schema.

use serde::{Deserialize, Serialize};

/// Signing/encryption settings protecting values a component hands to
/// untrusted transports.
///
/// Keys are base64-encoded secrets. An empty key means the consuming
/// component generates a volatile key at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoConfig {
    /// Whether signing/encryption is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Encryption key settings.
    #[serde(default)]
    pub encryption: EncryptionKeyConfig,
    /// Signing key settings.
    #[serde(default)]
    pub signing: SigningKeyConfig,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            encryption: EncryptionKeyConfig::default(),
            signing: SigningKeyConfig::default(),
        }
    }
}

/// Encryption key settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptionKeyConfig {
    /// The encryption key.
    #[serde(default)]
    pub key: String,
    /// Key size in bytes.
    #[serde(default = "default_encryption_key_size")]
    pub key_size: u32,
}

impl Default for EncryptionKeyConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            key_size: default_encryption_key_size(),
        }
    }
}

/// Signing key settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningKeyConfig {
    /// The signing key.
    #[serde(default)]
    pub key: String,
    /// Key size in bits.
    #[serde(default = "default_signing_key_size")]
    pub key_size: u32,
}

impl Default for SigningKeyConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            key_size: default_signing_key_size(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_encryption_key_size() -> u32 {
    16
}

fn default_signing_key_size() -> u32 {
    512
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_defaults() {
        let crypto = CryptoConfig::default();
        assert!(crypto.enabled);
        assert_eq!(crypto.encryption.key, "");
        assert_eq!(crypto.encryption.key_size, 16);
        assert_eq!(crypto.signing.key, "");
        assert_eq!(crypto.signing.key_size, 512);
    }
}
