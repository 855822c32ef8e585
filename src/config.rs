//! Configuration for a decimal input field.
//!
//! [`DecimalFieldConfig`] holds the three policies an input surface reads:
//! whether negatives are allowed, whether a zero is cleared on focus, and
//! whether the text is trimmed on commit. All three default to `true`.
//!
//! A config can be loaded from YAML:
//!
//! ```yaml
//! allows_negative_numbers: false
//! clear_zero_on_focus: true
//! trim_on_commit: true
//! ```
//!
//! Missing policy fields take their defaults.
//!
//! # Examples
//!
//! ```rust
//! use decimal_field::DecimalFieldConfig;
//!
//! let config = DecimalFieldConfig::default();
//! assert!(config.allows_negative_numbers);
//! assert!(config.clear_zero_on_focus);
//! assert!(config.trim_on_commit);
//!
//! let unsigned = DecimalFieldConfig {
//!     allows_negative_numbers: false,
//!     ..Default::default()
//! };
//! assert!(!unsigned.allows_negative_numbers);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Policies for a single decimal input field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecimalFieldConfig {
    /// Keep an adjacency-valid leading `-`. Turning this off on a live field
    /// strips the sign from the current text.
    #[serde(default = "true_value")]
    pub allows_negative_numbers: bool,

    /// Clear a numerically-zero text when the field gains focus.
    #[serde(default = "true_value")]
    pub clear_zero_on_focus: bool,

    /// Trim and ensure non-empty text when editing ends.
    #[serde(default = "true_value")]
    pub trim_on_commit: bool,
}

impl Default for DecimalFieldConfig {
    fn default() -> Self {
        Self {
            allows_negative_numbers: true,
            clear_zero_on_focus: true,
            trim_on_commit: true,
        }
    }
}

impl DecimalFieldConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn true_value() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_policies_take_defaults() {
        let config = DecimalFieldConfig::from_yaml("{}\n").expect("parse");
        assert_eq!(config, DecimalFieldConfig::default());
    }

    #[test]
    fn policy_only_yaml_parses() {
        let config = DecimalFieldConfig::from_yaml("clear_zero_on_focus: false\n").expect("parse");
        assert_eq!(
            config,
            DecimalFieldConfig {
                clear_zero_on_focus: false,
                ..Default::default()
            }
        );
    }

    #[test]
    fn stray_version_key_is_ignored() {
        let config = DecimalFieldConfig::from_yaml("version: \"1.0\"\n").expect("parse");
        assert_eq!(config, DecimalFieldConfig::default());
    }

    #[test]
    fn explicit_policies_are_read() {
        let yaml = "allows_negative_numbers: false\ntrim_on_commit: false\n";
        let config = DecimalFieldConfig::from_yaml(yaml).expect("parse");
        assert!(!config.allows_negative_numbers);
        assert!(config.clear_zero_on_focus);
        assert!(!config.trim_on_commit);
    }

    #[test]
    fn malformed_yaml_rejected() {
        let res = DecimalFieldConfig::from_yaml("allows_negative_numbers: [nope");
        assert!(matches!(res, Err(ConfigError::YamlParse(_))));
    }

    #[test]
    fn yaml_round_trip_keeps_policies() {
        let config = DecimalFieldConfig {
            clear_zero_on_focus: false,
            ..Default::default()
        };
        let yaml = config.to_yaml().expect("serialize");
        assert_eq!(DecimalFieldConfig::from_yaml(&yaml).expect("parse"), config);
    }
}
