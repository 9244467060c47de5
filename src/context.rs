//! Variable context handling.
//! The context maps variable names to values and is produced by external
//! metadata tooling as a JSON or YAML document; `--var KEY=VALUE`
//! overrides from the command line take priority over file entries.

use crate::error::{NfoError, NfoResult};
use crate::value::Value;
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

/// Mapping from variable name to value, supplied fresh per render.
pub type Context = IndexMap<String, Value>;

/// Loads a variable context from a JSON or YAML file.
///
/// JSON is tried first, then YAML, matching the configuration loading
/// order used elsewhere.
///
/// # Arguments
/// * `path` - Path to the context file
///
/// # Errors
/// * `NfoError::IoError` if the file cannot be read
/// * `NfoError::ConfigError` if the content parses as neither format
pub fn load_context<P: AsRef<Path>>(path: P) -> NfoResult<Context> {
    let path = path.as_ref();
    debug!("Loading variable context from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(NfoError::IoError)?;
    parse_context(&content)
}

/// Parses context content, trying JSON first and falling back to YAML.
pub fn parse_context(content: &str) -> NfoResult<Context> {
    match serde_json::from_str(content) {
        Ok(context) => Ok(context),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| NfoError::ConfigError(format!("Invalid context format: {}", e))),
    }
}

/// Parses a `KEY=VALUE` command-line override.
///
/// The value part is parsed as JSON where possible (so `--var count=3`
/// yields an integer and `--var urls='["a","b"]'` a sequence) and falls
/// back to a plain string otherwise.
pub fn parse_var(raw: &str) -> NfoResult<(String, Value)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| NfoError::ConfigError(format!("Invalid variable override: {:?}, expected KEY=VALUE", raw)))?;
    if key.is_empty() {
        return Err(NfoError::ConfigError(format!(
            "Invalid variable override: {:?}, expected KEY=VALUE",
            raw
        )));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::from(value));
    Ok((key.to_string(), value))
}
