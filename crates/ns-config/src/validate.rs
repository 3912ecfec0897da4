//! Configuration validation: JSON schema conformance plus semantic checks.

use std::path::Path;
use std::sync::OnceLock;

use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Relative location of the bundled schema within this crate.
pub const BUNDLED_SCHEMA_PATH: &str = "schemas/config.json";

const BUNDLED_SCHEMA: &str = include_str!("../schemas/config.json");

/// A compiled configuration schema.
pub struct ConfigSchema {
    document: Value,
    validator: jsonschema::Validator,
}

impl std::fmt::Debug for ConfigSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigSchema").field("id", &self.document.get("$id")).finish()
    }
}

impl ConfigSchema {
    /// The schema shipped with this crate, compiled on first use.
    pub fn bundled() -> Result<&'static ConfigSchema> {
        static SCHEMA: OnceLock<std::result::Result<ConfigSchema, String>> = OnceLock::new();
        SCHEMA
            .get_or_init(|| Self::compile(BUNDLED_SCHEMA, BUNDLED_SCHEMA_PATH))
            .as_ref()
            .map_err(|msg| ConfigError::ResourceMissing(msg.clone()))
    }

    /// Load and compile a schema file.
    pub fn from_path(path: &Path) -> Result<ConfigSchema> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ResourceMissing(format!("{}: {e}", path.display())))?;
        Self::compile(&text, &path.display().to_string()).map_err(ConfigError::ResourceMissing)
    }

    fn compile(text: &str, origin: &str) -> std::result::Result<ConfigSchema, String> {
        let document: Value =
            serde_json::from_str(text).map_err(|e| format!("{origin}: {e}"))?;
        let validator = jsonschema::validator_for(&document)
            .map_err(|e| format!("{origin}: invalid schema: {e}"))?;
        Ok(ConfigSchema { document, validator })
    }

    /// The raw schema document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Check structural conformance, reporting the first violation.
    pub fn check(&self, instance: &Value) -> Result<()> {
        match self.validator.iter_errors(instance).next() {
            None => Ok(()),
            Some(e) => Err(ConfigError::Schema {
                path: e.instance_path.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

/// Validate a configuration document against the bundled schema and semantic rules.
///
/// # Errors
///
/// - [`ConfigError::ResourceMissing`] if the bundled schema cannot be loaded;
/// - [`ConfigError::Schema`] if the document does not conform to it;
/// - [`ConfigError::UnsupportedConfiguration`] unless exactly one sample is data.
pub fn validate(document: &Value) -> Result<()> {
    validate_with(ConfigSchema::bundled()?, document)
}

/// Validate a configuration document against an explicit schema.
pub fn validate_with(schema: &ConfigSchema, document: &Value) -> Result<()> {
    schema.check(document)?;

    let n_data = document
        .get("Samples")
        .and_then(Value::as_array)
        .map(|samples| samples.iter().filter(|s| is_data(s)).count())
        .unwrap_or(0);
    if n_data != 1 {
        return Err(ConfigError::UnsupportedConfiguration(format!(
            "can only handle cases with exactly one data sample, found {n_data}"
        )));
    }

    // Cross-references (restriction lists naming unknown regions/samples) are not checked yet.

    Ok(())
}

fn is_data(sample: &Value) -> bool {
    sample.get("Data").and_then(Value::as_bool).unwrap_or(false)
}
