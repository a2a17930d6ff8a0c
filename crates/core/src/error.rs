//! Error types for Cyberkit
//!
//! The components themselves never fail: every styling input is a closed
//! enum resolved through an exhaustive table. Errors only arise at the
//! edges, when text is parsed into those enums or when launch
//! configuration is read from disk.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Cyberkit
#[derive(Debug, Error)]
pub enum CyberError {
    // ========================================================================
    // Parsing Errors
    // ========================================================================
    /// A name outside one of the closed enums
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file is not valid TOML for the expected schema
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("Failed to read configuration '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },

}

impl CyberError {
    /// Create an unknown-variant error listing the accepted names
    pub fn unknown_variant(
        kind: &'static str,
        value: impl Into<String>,
        expected: &[&'static str],
    ) -> Self {
        CyberError::UnknownVariant {
            kind,
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        CyberError::InvalidConfig(msg.into())
    }

    /// Check if this error comes from configuration handling
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            CyberError::InvalidConfig(_)
                | CyberError::ConfigParse(_)
                | CyberError::ConfigRead { .. }
        )
    }
}

/// Result type alias using CyberError
pub type CyberResult<T> = Result<T, CyberError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_lists_expected_names() {
        let err = CyberError::unknown_variant("size", "xl", &["sm", "md", "lg"]);
        assert!(!err.is_config());
        assert_eq!(
            err.to_string(),
            "Unknown size 'xl' (expected one of: sm, md, lg)"
        );
    }

    #[test]
    fn test_invalid_config_error() {
        let err = CyberError::invalid_config("window width must be positive");
        assert!(err.is_config());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: window width must be positive"
        );
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Table>("window = [").unwrap_err();
        let err: CyberError = parse_err.into();
        assert!(err.is_config());
    }
}
