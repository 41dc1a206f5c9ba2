//! Domain Entities
//!
//! Entities with identity and lifecycle.
//! - `Asset` - A calculated asset with its schedule
//! - `Register` - All saved assets, keyed by id

mod asset;
mod register;

pub use asset::{Asset, AssetDraft, AssetValuation};
pub use register::{Register, RegisterQuery, SortKey, SortOrder};
