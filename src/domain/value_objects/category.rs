//! Asset category value object and its suggested defaults
//!
//! The suggestions are a static lookup table. They prefill the residual value,
//! useful life and declining rate when the user leaves them out, and never
//! influence the calculators directly.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    /// Computers & IT equipment
    Computers,
    /// Motor vehicles
    Vehicles,
    /// Plant & machinery
    Machinery,
    /// Office furniture & fittings
    Furniture,
    /// Commercial buildings
    Buildings,
    /// Tools & equipment
    Tools,
    /// Leasehold improvements
    Leasehold,
    #[default]
    Other,
}

/// Suggested inputs for a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryDefaults {
    /// Share of cost expected back at the end of useful life.
    pub residual_fraction: Option<f64>,
    pub useful_life: u32,
    /// Declining-balance rate in percent.
    pub declining_rate: f64,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 8] = [
        AssetCategory::Computers,
        AssetCategory::Vehicles,
        AssetCategory::Machinery,
        AssetCategory::Furniture,
        AssetCategory::Buildings,
        AssetCategory::Tools,
        AssetCategory::Leasehold,
        AssetCategory::Other,
    ];

    /// Key used in the register file and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            AssetCategory::Computers => "computers",
            AssetCategory::Vehicles => "vehicles",
            AssetCategory::Machinery => "machinery",
            AssetCategory::Furniture => "furniture",
            AssetCategory::Buildings => "buildings",
            AssetCategory::Tools => "tools",
            AssetCategory::Leasehold => "leasehold",
            AssetCategory::Other => "other",
        }
    }

    /// Category for a stored key, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetCategory::Computers => "Computers & IT Equipment",
            AssetCategory::Vehicles => "Motor Vehicles",
            AssetCategory::Machinery => "Plant & Machinery",
            AssetCategory::Furniture => "Office Furniture & Fittings",
            AssetCategory::Buildings => "Buildings (Commercial)",
            AssetCategory::Tools => "Tools & Equipment",
            AssetCategory::Leasehold => "Leasehold Improvements",
            AssetCategory::Other => "Other",
        }
    }

    /// Typical residual value as a share of cost, for display.
    pub fn residual_range(&self) -> Option<&'static str> {
        match self {
            AssetCategory::Computers => Some("0-10%"),
            AssetCategory::Vehicles => Some("10-20%"),
            AssetCategory::Machinery => Some("5-15%"),
            AssetCategory::Furniture => Some("5-10%"),
            AssetCategory::Buildings => Some("20-30%"),
            AssetCategory::Tools => Some("5-10%"),
            AssetCategory::Leasehold => Some("0-5%"),
            AssetCategory::Other => None,
        }
    }

    pub fn defaults(&self) -> CategoryDefaults {
        let (residual_fraction, useful_life, declining_rate) = match self {
            AssetCategory::Computers => (Some(0.05), 3, 35.0),
            AssetCategory::Vehicles => (Some(0.15), 5, 22.5),
            AssetCategory::Machinery => (Some(0.10), 10, 20.0),
            AssetCategory::Furniture => (Some(0.075), 7, 12.5),
            AssetCategory::Buildings => (Some(0.25), 30, 3.5),
            AssetCategory::Tools => (None, 5, 26.67),
            AssetCategory::Leasehold => (None, 10, 10.0),
            AssetCategory::Other => (None, 5, 20.0),
        };

        CategoryDefaults {
            residual_fraction,
            useful_life,
            declining_rate,
        }
    }

    /// Suggested residual value for `cost`, rounded to a whole amount.
    ///
    /// `None` when the category has no residual guideline or the cost is not
    /// positive.
    pub fn suggested_residual(&self, cost: f64) -> Option<f64> {
        if cost.is_nan() || cost <= 0.0 {
            return None;
        }
        self.defaults()
            .residual_fraction
            .map(|fraction| (cost * fraction).round())
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggested_residual_rounds_share_of_cost() {
        assert_eq!(
            AssetCategory::Computers.suggested_residual(1_000_000.0),
            Some(50_000.0)
        );
        assert_eq!(AssetCategory::Furniture.suggested_residual(1_234.0), Some(93.0));
        assert_eq!(AssetCategory::Buildings.suggested_residual(10.0), Some(3.0));
    }

    #[test]
    fn no_residual_suggestion_without_guideline_or_cost() {
        assert_eq!(AssetCategory::Tools.suggested_residual(5_000.0), None);
        assert_eq!(AssetCategory::Other.suggested_residual(5_000.0), None);
        assert_eq!(AssetCategory::Vehicles.suggested_residual(0.0), None);
    }

    #[test]
    fn defaults_table() {
        let computers = AssetCategory::Computers.defaults();
        assert_eq!(computers.useful_life, 3);
        assert_eq!(computers.declining_rate, 35.0);

        let buildings = AssetCategory::Buildings.defaults();
        assert_eq!(buildings.useful_life, 30);
        assert_eq!(buildings.declining_rate, 3.5);

        let other = AssetCategory::Other.defaults();
        assert_eq!(other.useful_life, 5);
        assert_eq!(other.declining_rate, 20.0);
    }

    #[test]
    fn from_key_ignores_case() {
        assert_eq!(AssetCategory::from_key("Vehicles"), Some(AssetCategory::Vehicles));
        assert_eq!(AssetCategory::from_key(" tools "), Some(AssetCategory::Tools));
        assert_eq!(AssetCategory::from_key(""), None);
    }

    #[test]
    fn key_matches_serde_name() {
        for category in AssetCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }
}
