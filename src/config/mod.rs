//! Configuration module for assetbook
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETBOOK_*)
//! 3. Project config (.assetbook/config.toml)
//! 4. User config (~/.config/assetbook/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{COLOR_ENV, CURRENCY_ENV, PROJECT_CONFIG_PATH};
pub use types::{ColorMode, Config, DefaultsConfig, OutputConfig, RegisterConfig};
