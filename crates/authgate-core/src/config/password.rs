//! Password encoding and principal transformation sub-schemas.

use serde::{Deserialize, Serialize};

/// Password encoder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordEncoderConfig {
    /// Encoder kind.
    #[serde(default)]
    pub kind: PasswordEncoderKind,
    /// Digest algorithm used when `kind` is `digest` (e.g. `"SHA-256"`).
    #[serde(default)]
    pub encoding_algorithm: String,
    /// Character encoding applied to the password before hashing.
    #[serde(default = "default_character_encoding")]
    pub character_encoding: String,
    /// Shared secret mixed into the encoding, for encoders that take one.
    #[serde(default)]
    pub secret: String,
    /// Cost parameter: bcrypt rounds, or derived key length.
    #[serde(default = "default_strength")]
    pub strength: u32,
}

impl Default for PasswordEncoderConfig {
    fn default() -> Self {
        Self {
            kind: PasswordEncoderKind::default(),
            encoding_algorithm: String::new(),
            character_encoding: default_character_encoding(),
            secret: String::new(),
            strength: default_strength(),
        }
    }
}

/// Supported password encoder kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordEncoderKind {
    /// Passwords are compared in plain text.
    None,
    /// Message-digest encoder using `encoding_algorithm`.
    Digest,
    /// Bcrypt with `strength` rounds.
    Bcrypt,
    /// Scrypt.
    Scrypt,
    /// PBKDF2 with `secret` and `strength`.
    Pbkdf2,
}

impl Default for PasswordEncoderKind {
    fn default() -> Self {
        Self::None
    }
}

impl std::fmt::Display for PasswordEncoderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasswordEncoderKind::None => write!(f, "none"),
            PasswordEncoderKind::Digest => write!(f, "digest"),
            PasswordEncoderKind::Bcrypt => write!(f, "bcrypt"),
            PasswordEncoderKind::Scrypt => write!(f, "scrypt"),
            PasswordEncoderKind::Pbkdf2 => write!(f, "pbkdf2"),
        }
    }
}

/// Principal transformation configuration.
///
/// Applied to the supplied username before the handler looks it up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrincipalTransformationConfig {
    /// Prefix prepended to the username.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Suffix appended to the username.
    #[serde(default)]
    pub suffix: Option<String>,
    /// Case conversion applied to the username.
    #[serde(default)]
    pub case_conversion: CaseConversion,
}

/// Case conversion applied during principal transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseConversion {
    /// Leave the username as supplied.
    None,
    /// Convert the username to upper case.
    Uppercase,
    /// Convert the username to lower case.
    Lowercase,
}

impl Default for CaseConversion {
    fn default() -> Self {
        Self::None
    }
}

fn default_character_encoding() -> String {
    "UTF-8".to_string()
}

fn default_strength() -> u32 {
    16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_defaults() {
        let encoder = PasswordEncoderConfig::default();
        assert_eq!(encoder.kind, PasswordEncoderKind::None);
        assert_eq!(encoder.encoding_algorithm, "");
        assert_eq!(encoder.character_encoding, "UTF-8");
        assert_eq!(encoder.secret, "");
        assert_eq!(encoder.strength, 16);
    }

    #[test]
    fn test_transformation_defaults() {
        let transform = PrincipalTransformationConfig::default();
        assert!(transform.prefix.is_none());
        assert!(transform.suffix.is_none());
        assert_eq!(transform.case_conversion, CaseConversion::None);
    }
}
