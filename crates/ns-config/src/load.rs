//! Loading configuration files.

use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::schema::Configuration;
use crate::validate::validate;

/// Parse YAML (or JSON, a YAML subset) into a generic document.
pub fn parse_document(text: &str) -> Result<Value> {
    Ok(serde_yaml_ng::from_str(text)?)
}

/// Convert a validated document into typed configuration.
pub fn from_document(document: Value) -> Result<Configuration> {
    Ok(serde_json::from_value(document)?)
}

/// Parse, validate and convert an in-memory configuration.
pub fn parse_config(text: &str) -> Result<Configuration> {
    let document = parse_document(text)?;
    validate(&document)?;
    from_document(document)
}

/// Load, validate and return a configuration file.
pub fn load(path: &Path) -> Result<Configuration> {
    tracing::info!("opening config file {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}
