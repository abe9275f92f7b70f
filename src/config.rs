// File: src/config.rs
use crate::analysis::reference::{self, Language};
use crate::core::types::FrequencyTable;
use crate::error::CipherError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CONFIG_PATH: &str = "caesar.json";
pub const CONFIG_ENV_VAR: &str = "CAESAR_CONFIG";

/// User settings for the menu. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Built-in reference table used by frequency analysis.
    pub language: Language,
    /// JSON table that replaces the built-in one when set.
    pub frequency_table: Option<PathBuf>,
    /// Styled menu output.
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            frequency_table: None,
            color: true,
        }
    }
}

impl AppConfig {
    /// Loads `path`, or the defaults if it does not exist. A file that exists
    /// but does not parse is an error.
    pub fn from_file_or_default(path: &Path) -> Result<Self, CipherError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Self = serde_json::from_str(&contents)?;
                info!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Path named by `CAESAR_CONFIG`, falling back to `caesar.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// The table frequency analysis should score against.
    pub fn frequency_table(&self) -> Result<FrequencyTable, CipherError> {
        match &self.frequency_table {
            Some(path) => reference::load_table(path),
            None => Ok(reference::for_language(self.language)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::from_file_or_default(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.frequency_table().unwrap(), reference::russian());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("caesar.json");
        fs::write(&path, r#"{"language": "english"}"#).unwrap();

        let config = AppConfig::from_file_or_default(&path).unwrap();
        assert_eq!(config.language, Language::English);
        assert!(config.color);
        assert_eq!(config.frequency_table().unwrap(), reference::english());
    }

    #[test]
    fn custom_table_overrides_language() {
        let dir = tempdir().unwrap();
        let table_path = dir.path().join("table.json");
        fs::write(&table_path, r#"{"x": 1.0}"#).unwrap();

        let config = AppConfig {
            frequency_table: Some(table_path),
            ..AppConfig::default()
        };
        let table = config.frequency_table().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[&'x'], 1.0);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("caesar.json");
        fs::write(&path, r#"{"language": "klingon"}"#).unwrap();
        assert!(matches!(
            AppConfig::from_file_or_default(&path),
            Err(CipherError::Json(_))
        ));
    }
}
