use thiserror::Error;

/// Errors that can occur while loading a [`DecimalFieldConfig`](crate::DecimalFieldConfig).
///
/// The normalizer itself has no error channel: every input string maps to a
/// defined output. Only configuration loading can fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}
