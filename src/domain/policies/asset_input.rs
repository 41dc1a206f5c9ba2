//! Asset input validation
//!
//! The calculators accept any numbers. This policy is the only gate between
//! user input and the engine: a draft that fails here is never calculated or
//! saved. Residual values above cost and a zero useful life are rejected
//! rather than passed through.

use std::fmt;

use crate::domain::entities::AssetDraft;

/// A field that failed validation and the message shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn validate_asset_input(draft: &AssetDraft) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if draft.name.trim().is_empty() {
        issues.push(ValidationIssue::new("name", "Asset name is required"));
    }

    let cost_valid = draft.cost.is_finite() && draft.cost > 0.0;
    if !cost_valid {
        issues.push(ValidationIssue::new("cost", "Purchase cost must be positive"));
    }

    if draft.useful_life == 0 {
        issues.push(ValidationIssue::new("useful_life", "Useful life must be positive"));
    }

    if !draft.residual_value.is_finite() || draft.residual_value < 0.0 {
        issues.push(ValidationIssue::new(
            "residual_value",
            "Residual value cannot be negative",
        ));
    } else if cost_valid && draft.residual_value > draft.cost {
        issues.push(ValidationIssue::new(
            "residual_value",
            "Residual value cannot exceed purchase cost",
        ));
    }

    if draft.method.uses_rate() {
        if let Some(rate) = draft.rate {
            if !rate.is_finite() || rate <= 0.0 || rate > 100.0 {
                issues.push(ValidationIssue::new(
                    "rate",
                    "Depreciation rate must be between 0 and 100",
                ));
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{AssetCategory, DepreciationMethod};

    fn draft() -> AssetDraft {
        AssetDraft {
            name: "Delivery Van".to_string(),
            category: AssetCategory::Vehicles,
            cost: 25_000.0,
            residual_value: 3_750.0,
            useful_life: 5,
            purchase_date: None,
            method: DepreciationMethod::DecliningBalance,
            rate: Some(22.5),
        }
    }

    fn fields(result: Result<(), Vec<ValidationIssue>>) -> Vec<&'static str> {
        result.unwrap_err().into_iter().map(|i| i.field).collect()
    }

    #[test]
    fn accepts_complete_draft() {
        assert!(validate_asset_input(&draft()).is_ok());
    }

    #[test]
    fn residual_equal_to_cost_is_allowed() {
        let mut d = draft();
        d.residual_value = d.cost;
        assert!(validate_asset_input(&d).is_ok());
    }

    #[test]
    fn reports_every_failing_field() {
        let d = AssetDraft {
            name: "   ".to_string(),
            cost: 0.0,
            useful_life: 0,
            residual_value: -1.0,
            rate: Some(0.0),
            ..draft()
        };
        assert_eq!(
            fields(validate_asset_input(&d)),
            ["name", "cost", "useful_life", "residual_value", "rate"]
        );
    }

    #[test]
    fn rejects_residual_above_cost() {
        let mut d = draft();
        d.residual_value = 30_000.0;
        let issues = validate_asset_input(&d).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Residual value cannot exceed purchase cost");
    }

    #[test]
    fn rejects_non_finite_cost() {
        let mut d = draft();
        d.cost = f64::NAN;
        assert_eq!(fields(validate_asset_input(&d)), ["cost"]);
    }

    #[test]
    fn rate_is_ignored_for_straight_line() {
        let mut d = draft();
        d.method = DepreciationMethod::StraightLine;
        d.rate = Some(250.0);
        assert!(validate_asset_input(&d).is_ok());
    }

    #[test]
    fn rate_over_one_hundred_is_rejected() {
        let mut d = draft();
        d.rate = Some(100.5);
        assert_eq!(fields(validate_asset_input(&d)), ["rate"]);
    }

    #[test]
    fn issue_display_names_the_field() {
        let issue = ValidationIssue::new("cost", "Purchase cost must be positive");
        assert_eq!(issue.to_string(), "cost: Purchase cost must be positive");
    }
}
