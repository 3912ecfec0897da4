//! Error types for configuration processing.

use thiserror::Error;

/// Configuration error type.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Document does not conform to the configuration schema.
    #[error("schema violation at '{path}': {message}")]
    Schema {
        /// JSON pointer of the offending instance (empty for the root).
        path: String,
        /// Diagnostic from the schema engine.
        message: String,
    },

    /// Structurally valid, but not a configuration this system can handle.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// Systematic `Type` is neither `Normalization` nor `NormPlusShape`.
    #[error("unknown systematics type: {0}")]
    UnsupportedSystematicType(String),

    /// Template label other than `Nominal`, `Up` or `Down`.
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// No region with the requested name.
    #[error("region {0} not found in config")]
    RegionNotFound(String),

    /// No sample with the requested name.
    #[error("sample {0} not found in config")]
    SampleNotFound(String),

    /// The configuration schema could not be located or loaded.
    #[error("could not load config schema: {0}")]
    ResourceMissing(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON conversion error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigError>;
