//! assetbook - fixed asset depreciation schedules and register
//!
//! Computes straight-line and declining-balance depreciation schedules,
//! suggests category defaults, and keeps a register of saved assets with
//! their current net book values.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{calculate, CalculateOptions, Calculation, RegisterUseCase};
pub use config::Config;
pub use domain::entities::{Asset, AssetDraft, Register, RegisterQuery, SortKey, SortOrder};
pub use domain::services::{
    calculate_declining_balance, calculate_straight_line, Schedule, ScheduleEntry,
};
pub use domain::value_objects::{AssetCategory, AssetId, DepreciationMethod};
pub use error::{AssetbookError, AssetbookResult};
