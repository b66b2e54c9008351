//! Monitor configuration
//!
//! Read from a TOML file; every section is optional. Environment variables
//! override individual values after the file is parsed.

#![allow(clippy::result_large_err)]

use chanwatch_core::errors::{ChanwatchError, ExError, ExErrorKind, Result};
use chanwatch_core::logging_facility::Profile;
use chanwatch_core::StoreKind;
use chanwatch_core_types::Sensitive;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "CHANWATCH_CONFIG";
pub const TOKEN_ENV: &str = "CHANWATCH_TOKEN";
pub const PRIMARY_PATH_ENV: &str = "CHANWATCH_PRIMARY_PATH";
pub const SECONDARY_PATH_ENV: &str = "CHANWATCH_SECONDARY_PATH";

pub const DEFAULT_CONFIG_FILE: &str = "chanwatch.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitorConfig {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings used by the bot transport; the monitor itself never reads them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub token: Sensitive<String>,
    /// Channel whose posts are scanned
    pub scan_channel_id: Option<i64>,
    /// Chat that receives notifications
    pub notification_chat_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_primary_path")]
    pub primary_path: PathBuf,
    #[serde(default = "default_secondary_path")]
    pub secondary_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            primary_path: default_primary_path(),
            secondary_path: default_secondary_path(),
        }
    }
}

impl StorageConfig {
    pub fn path(&self, store: StoreKind) -> &Path {
        match store {
            StoreKind::Primary => &self.primary_path,
            StoreKind::Secondary => &self.secondary_path,
        }
    }
}

fn default_primary_path() -> PathBuf {
    PathBuf::from("keywords_data.json")
}

fn default_secondary_path() -> PathBuf {
    PathBuf::from("secondary_keywords_data.json")
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub profile: Profile,
}

impl MonitorConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `CHANWATCH_CONFIG` or
    /// `./chanwatch.toml` is used if present, defaults otherwise. Process
    /// environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let candidate = resolve_config_path();
                if candidate.exists() {
                    Self::from_file(&candidate)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            let kind = if e.kind() == std::io::ErrorKind::NotFound {
                ExErrorKind::NotFound
            } else {
                ExErrorKind::Configuration
            };
            ExError::new(kind)
                .with_op("load_config")
                .with_path(path.display().to_string())
                .with_message(format!("failed to read config file: {}", e))
        })?;
        Self::from_toml_str(&raw, path)
    }

    /// Parse TOML text; `origin` is only used in error messages.
    pub fn from_toml_str(raw: &str, origin: &Path) -> Result<Self> {
        toml::from_str(raw).map_err(|e| {
            ChanwatchError::Config {
                path: origin.display().to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Apply overrides from a key lookup (the process environment in `load`).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(TOKEN_ENV) {
            self.telegram.token = Sensitive::new(token);
        }
        if let Some(path) = lookup(PRIMARY_PATH_ENV) {
            self.storage.primary_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(SECONDARY_PATH_ENV) {
            self.storage.secondary_path = PathBuf::from(path);
        }
    }
}

fn resolve_config_path() -> PathBuf {
    match env::var(CONFIG_ENV) {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}
