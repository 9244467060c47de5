//! Configuration handling for nfogen.
//! Provides the user data directory layout (templates and artwork live
//! in per-user data dirs) and dotted-key access to the persistent
//! `config.yaml` settings file.

use crate::constants::{CONFIG_FILE, DESCRIPTION_EXT, TEMPLATE_EXT};
use crate::error::{NfoError, NfoResult};
use log::debug;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Well-known locations under the per-user data directory.
#[derive(Debug, Clone)]
pub struct Directories {
    pub user: PathBuf,
    pub templates: PathBuf,
    pub artwork: PathBuf,
}

impl Directories {
    /// Resolves the platform user data directory for nfogen.
    ///
    /// # Errors
    /// * `NfoError::ConfigError` if the platform has no user data directory
    pub fn new() -> NfoResult<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| NfoError::ConfigError("No user data directory available".to_string()))?;
        Ok(Self::with_root(data_dir.join("nfogen")))
    }

    /// Builds the directory layout under an explicit root. Used by tests
    /// to point at a temporary directory.
    pub fn with_root(user: PathBuf) -> Self {
        let templates = user.join("templates");
        let artwork = user.join("artwork");
        Self { user, templates, artwork }
    }

    /// Path of the persistent settings file.
    pub fn config_file(&self) -> PathBuf {
        self.user.join(CONFIG_FILE)
    }

    /// Path of a named template; `description` selects the BBCode
    /// description variant.
    pub fn template_file(&self, name: &str, description: bool) -> PathBuf {
        let ext = if description { DESCRIPTION_EXT } else { TEMPLATE_EXT };
        self.templates.join(format!("{}.{}", name, ext))
    }

    /// Path of a named artwork file.
    pub fn artwork_file(&self, name: &str) -> PathBuf {
        self.artwork.join(format!("{}.{}", name, TEMPLATE_EXT))
    }
}

/// Loads the settings mapping, returning an empty mapping when the file
/// does not exist yet.
///
/// # Errors
/// * `NfoError::ConfigError` if the file exists but is not valid YAML
pub fn load_settings(path: &Path) -> NfoResult<Mapping> {
    if !path.exists() {
        debug!("Settings file {} does not exist", path.display());
        return Ok(Mapping::new());
    }
    let content = fs::read_to_string(path).map_err(NfoError::IoError)?;
    let value: Value = serde_yaml::from_str(&content)
        .map_err(|e| NfoError::ConfigError(format!("Invalid settings format: {}", e)))?;
    Ok(value.as_mapping().cloned().unwrap_or_default())
}

/// Writes the settings mapping back to disk, creating parent directories
/// as needed.
pub fn save_settings(path: &Path, settings: &Mapping) -> NfoResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(NfoError::IoError)?;
    }
    let content = serde_yaml::to_string(settings)
        .map_err(|e| NfoError::ConfigError(format!("Cannot serialize settings: {}", e)))?;
    fs::write(path, content).map_err(NfoError::IoError)
}

/// Looks up a dotted key (e.g. `fanart.api_key`) in the settings.
pub fn get_key<'a>(settings: &'a Mapping, key: &str) -> Option<&'a Value> {
    match key.split_once('.') {
        None => settings.get(key),
        Some((head, rest)) => get_key(settings.get(head)?.as_mapping()?, rest),
    }
}

/// Sets a dotted key, creating intermediate mappings along the path.
/// A non-mapping intermediate value is replaced.
pub fn set_key(settings: &mut Mapping, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            settings.insert(Value::String(key.to_string()), value);
        }
        Some((head, rest)) => {
            let entry = settings
                .entry(Value::String(head.to_string()))
                .or_insert_with(|| Value::Mapping(Mapping::new()));
            if !entry.is_mapping() {
                *entry = Value::Mapping(Mapping::new());
            }
            if let Value::Mapping(child) = entry {
                set_key(child, rest, value);
            }
        }
    }
}

/// Removes a dotted key. Returns whether the key was present.
pub fn unset_key(settings: &mut Mapping, key: &str) -> bool {
    match key.split_once('.') {
        None => settings.remove(key).is_some(),
        Some((head, rest)) => settings
            .get_mut(head)
            .and_then(Value::as_mapping_mut)
            .is_some_and(|child| unset_key(child, rest)),
    }
}
