//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DepreciationMethod;
use crate::error::AssetbookResult;

use super::loader;
use super::ConfigWarning;

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Label shown next to amounts and in CSV headers.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
            currency: default_currency(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "₦".to_string()
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Register storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RegisterConfig {
    /// Register file; `~/.assetbook/register.json` when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Defaults applied by `assetbook calculate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub method: DepreciationMethod,

    /// Declining-balance rate used instead of the category rate.
    #[serde(default)]
    pub declining_rate: Option<f64>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub register: RegisterConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AssetbookResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AssetbookResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root).0
    }

    /// Like [`Config::load_or_default`], also returning unknown-key warnings
    /// from the file that was used.
    pub fn load_or_default_with_warnings(
        project_root: Option<&Path>,
    ) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (ASSETBOOK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
