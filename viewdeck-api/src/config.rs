//! TOML-backed key-value store for view and controller configuration.

use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors from loading or saving a configuration store.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    Parse(String),

    /// Value could not be converted to TOML
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Persistent key-value store backed by TOML.
///
/// Views and the controller address it with dotted string keys; the
/// controller itself only needs the string contract ([`ConfigStore::get_str`]
/// and [`ConfigStore::set_str`]), while views may store any serializable
/// value.
#[derive(Debug, Default)]
pub struct ConfigStore {
    values: HashMap<String, toml::Value>,
    dirty: bool,
}

impl ConfigStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            dirty: false,
        }
    }

    /// Load a store from a TOML file.
    ///
    /// Returns an empty store if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path)?;
        let values: HashMap<String, toml::Value> =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(Self {
            values,
            dirty: false,
        })
    }

    /// Save the store to a TOML file.
    pub fn save(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(&self.values)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent().filter(|p| !p.exists()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        self.dirty = false;
        Ok(())
    }

    /// Get a string value.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    /// Set a string value.
    pub fn set_str(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), toml::Value::String(value.to_string()));
        self.dirty = true;
    }

    /// Get a typed value.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values.get(key).and_then(|v| v.clone().try_into().ok())
    }

    /// Set a typed value.
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), ConfigError> {
        let toml_value =
            toml::Value::try_from(value).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        self.values.insert(key.to_string(), toml_value);
        self.dirty = true;
        Ok(())
    }

    /// Check if the store has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_store_default_is_empty() {
        let store = ConfigStore::new();
        assert!(store.values.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_get_set_str() {
        let mut store = ConfigStore::new();
        store.set_str("panel.defaultview", "hex");

        assert_eq!(
            store.get_str("panel.defaultview"),
            Some("hex".to_string())
        );
        assert_eq!(store.get_str("missing"), None);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_get_str_ignores_non_string_values() {
        let mut store = ConfigStore::new();
        store.set("count", 3i64).unwrap();

        assert_eq!(store.get_str("count"), None);
        assert_eq!(store.get::<i64>("count"), Some(3));
    }

    #[test]
    fn test_typed_get_set() {
        let mut store = ConfigStore::new();
        store.set("wrap", true).unwrap();
        store.set("limit", 1024i64).unwrap();

        assert_eq!(store.get::<bool>("wrap"), Some(true));
        assert_eq!(store.get::<i64>("limit"), Some(1024));
        assert_eq!(store.get::<bool>("missing"), None);
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let store = ConfigStore::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert!(store.values.is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut store = ConfigStore::new();
        store.set_str("panel.defaultview", "syntax");
        store.set("panel.views.hex.columns", 16i64).unwrap();
        store.save(&path).unwrap();
        assert!(!store.is_dirty());

        let loaded = ConfigStore::load(&path).unwrap();
        assert_eq!(
            loaded.get_str("panel.defaultview"),
            Some("syntax".to_string())
        );
        assert_eq!(loaded.get::<i64>("panel.views.hex.columns"), Some(16));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/config.toml");

        let mut store = ConfigStore::new();
        store.set_str("key", "value");
        store.save(&path).unwrap();

        assert!(path.exists());
    }
}
