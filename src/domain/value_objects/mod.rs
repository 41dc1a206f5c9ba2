//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_id;
mod category;
mod config_warning;
mod method;

pub use asset_id::AssetId;
pub use category::{AssetCategory, CategoryDefaults};
pub use config_warning::ConfigWarning;
pub use method::DepreciationMethod;
