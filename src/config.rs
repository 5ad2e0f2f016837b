//! Run configuration: remote file identity, input theme roots, output location.
//!
//! Loaded from an optional TOML file; every field has a default so a config
//! file only needs the values that differ. CLI flags override individual
//! fields after loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Names of the three artifacts written to `output_dir`.
pub const ICONS_FILE: &str = "icons.json";
pub const THUMBNAILS_LIGHT_FILE: &str = "thumbnails.json";
pub const THUMBNAILS_DARK_FILE: &str = "thumbnails-dark.json";

/// Configuration for one catalog run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Key of the published design library file.
    pub file_key: String,
    /// Base URL of the remote REST API.
    pub api_base: String,
    /// Environment variable holding the access token.
    pub token_env: String,
    /// Directory containing both theme roots.
    pub input_dir: PathBuf,
    /// Light theme root, relative to `input_dir`.
    pub light_dir: PathBuf,
    /// Dark theme root, relative to `input_dir`.
    pub dark_dir: PathBuf,
    /// Extension of vector files to index, without the dot.
    pub asset_extension: String,
    /// Where `icons.json` and the thumbnail tables are written.
    pub output_dir: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file_key: String::new(),
            api_base: "https://api.figma.com/v1".into(),
            token_env: "FIGMA_TOKEN".into(),
            input_dir: PathBuf::from("input"),
            light_dir: PathBuf::from("XAML Active Light Theme"),
            dark_dir: PathBuf::from("XAML Active Dark Theme"),
            asset_extension: "svg".into(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl CatalogConfig {
    /// Load from a TOML file. Missing fields take their defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Reject configurations that cannot produce a catalog.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.file_key.trim().is_empty() {
            return Err(ConfigError::MissingFileKey);
        }
        Ok(())
    }

    /// Read the access token from `token_env`.
    pub fn resolve_token(&self) -> ConfigResult<String> {
        match std::env::var(&self.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(ConfigError::MissingToken {
                var: self.token_env.clone(),
            }),
        }
    }

    pub fn light_root(&self) -> PathBuf {
        self.input_dir.join(&self.light_dir)
    }

    pub fn dark_root(&self) -> PathBuf {
        self.input_dir.join(&self.dark_dir)
    }
}
