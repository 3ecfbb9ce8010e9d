//! Persisted calculator settings
//!
//! Stored as pretty JSON in `<config dir>/tally/config.json`. Set
//! `TALLY_CONFIG` to point at another file. Missing fields fall back to
//! their defaults so older files keep loading.

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::evaluator::Evaluator;
use crate::storage::config_dir;

/// Characters the entry accepts while typing, not counting a leading `-`.
pub const DEFAULT_ENTRY_MAX_LEN: usize = 16;

/// Environment variable overriding the settings path.
pub const CONFIG_ENV: &str = "TALLY_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum typed entry length
    pub entry_max_len: usize,
    /// Initial window width in points
    pub window_width: f32,
    /// Initial window height in points
    pub window_height: f32,
    /// Font size of the entry line
    pub font_size_entry: f32,
    /// Font size of the temp line
    pub font_size_temp: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry_max_len: DEFAULT_ENTRY_MAX_LEN,
            window_width: 320.0,
            window_height: 460.0,
            font_size_entry: 40.0,
            font_size_temp: 16.0,
        }
    }
}

impl Config {
    pub fn path() -> PathBuf {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => config_dir("tally").join("config.json"),
        }
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path())
    }

    /// Read settings from `path`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config: Config = serde_json::from_str(&data).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(io_err)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entry_max_len == 0 {
            return Err(ConfigError::Invalid("entry_max_len must be at least 1".into()));
        }
        for (name, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("font_size_entry", self.font_size_entry),
            ("font_size_temp", self.font_size_temp),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        Ok(())
    }

    /// A fresh evaluator honouring these settings.
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.entry_max_len)
    }
}
