//! Domain Policies
//!
//! Rules applied at the boundary, before any numbers reach the engine.

mod asset_input;

pub use asset_input::{validate_asset_input, ValidationIssue};
