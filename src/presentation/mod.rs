//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use assetbook::presentation::factory;
//!
//! let register = factory::create_register_use_case(&config, None);
//! let assets = register.list(&Default::default())?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, ExportFormat, ExportTarget};
pub use factory::create_register_use_case;
