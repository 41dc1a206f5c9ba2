//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::RegisterUseCase;
use crate::config::Config;
use crate::infrastructure::JsonRegisterRepository;

/// Where the register lives: `--register`, else `ASSETBOOK_REGISTER_PATH` or
/// `register.path` from config, else `~/.assetbook/register.json`.
pub fn register_path(config: &Config, cli_override: Option<&Path>) -> PathBuf {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| config.register.path.clone())
        .unwrap_or_else(|| JsonRegisterRepository::new().path().to_path_buf())
}

/// Create a register use case backed by the JSON register file.
pub fn create_register_use_case(config: &Config, cli_override: Option<&Path>) -> RegisterUseCase {
    let path = register_path(config, cli_override);
    RegisterUseCase::new(Arc::new(JsonRegisterRepository::with_path(path)))
        .with_default_rate(config.defaults.declining_rate)
}
