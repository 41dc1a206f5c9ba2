//! Depreciation method value object

use serde::{Deserialize, Serialize};

/// How a schedule spreads the depreciable amount over the useful life.
///
/// Stored as `"Straight-Line"` / `"Declining Balance"`; typed on the command
/// line as `straight-line` / `declining-balance`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum DepreciationMethod {
    /// Same amount every year
    #[default]
    #[serde(rename = "Straight-Line", alias = "straight-line")]
    StraightLine,
    /// Fixed percentage of the previous year's book value
    #[serde(rename = "Declining Balance", alias = "declining-balance")]
    DecliningBalance,
}

impl DepreciationMethod {
    pub fn label(&self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => "Straight-Line",
            DepreciationMethod::DecliningBalance => "Declining Balance",
        }
    }

    /// Whether the method takes a percentage rate.
    pub fn uses_rate(&self) -> bool {
        matches!(self, DepreciationMethod::DecliningBalance)
    }
}

impl std::fmt::Display for DepreciationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
