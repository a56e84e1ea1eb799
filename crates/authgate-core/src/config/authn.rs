//! Authentication handler configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::password::{PasswordEncoderConfig, PrincipalTransformationConfig};

/// Authentication handler configuration.
///
/// Each optional section enables the corresponding handler; an absent
/// section means that handler is not configured at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthnConfig {
    /// File-based authentication handler.
    #[serde(default)]
    pub file: Option<FileAuthnConfig>,
    /// REST endpoint authorization settings.
    #[serde(default)]
    pub rest: Option<RestAuthnConfig>,
}

/// File-based authentication handler configuration.
///
/// Accounts are kept in a plain text file, one
/// `username<separator>password` entry per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAuthnConfig {
    /// Path to the accounts file. Must be supplied; there is no default.
    #[serde(default)]
    pub filename: PathBuf,
    /// Separator between the username and password fields.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Password encoder applied to credentials read from the file.
    #[serde(default)]
    pub password_encoder: PasswordEncoderConfig,
    /// Principal transformation applied to the supplied username before
    /// it is looked up.
    #[serde(default)]
    pub principal_transformation: PrincipalTransformationConfig,
    /// Handler instance name.
    #[serde(default)]
    pub name: Option<String>,
}

impl Default for FileAuthnConfig {
    fn default() -> Self {
        Self {
            filename: PathBuf::new(),
            separator: default_separator(),
            password_encoder: PasswordEncoderConfig::default(),
            principal_transformation: PrincipalTransformationConfig::default(),
            name: None,
        }
    }
}

/// REST endpoint authorization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestAuthnConfig {
    /// Attribute the authenticated principal must carry in order to allow
    /// the requested operation.
    #[serde(default)]
    pub attribute_name: Option<String>,
    /// Required value of that attribute; may be a regex pattern.
    #[serde(default)]
    pub attribute_value: Option<String>,
    /// Throttling policy applied to authentication requests.
    #[serde(default = "default_throttler")]
    pub throttler: String,
}

impl Default for RestAuthnConfig {
    fn default() -> Self {
        Self {
            attribute_name: None,
            attribute_value: None,
            throttler: default_throttler(),
        }
    }
}

fn default_separator() -> String {
    "::".to_string()
}

fn default_throttler() -> String {
    "never".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_authn_defaults() {
        let file = FileAuthnConfig::default();
        assert_eq!(file.filename, PathBuf::new());
        assert_eq!(file.separator, "::");
        assert!(file.name.is_none());
    }

    #[test]
    fn test_separator_is_exact() {
        // The separator is used verbatim, no trimming or escaping.
        let file = FileAuthnConfig::default();
        assert_eq!(file.separator.len(), 2);
        assert_eq!(file.separator.as_bytes(), b"::");
    }

    #[test]
    fn test_rest_authn_defaults() {
        let rest = RestAuthnConfig::default();
        assert!(rest.attribute_name.is_none());
        assert!(rest.attribute_value.is_none());
        assert_eq!(rest.throttler, "never");
    }
}
