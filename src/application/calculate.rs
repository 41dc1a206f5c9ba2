//! Calculate Use Case
//!
//! Resolves what the user typed into a complete draft (filling gaps from the
//! category defaults), validates it, and runs the depreciation engine.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::entities::{Asset, AssetDraft};
use crate::domain::policies::validate_asset_input;
use crate::domain::services::Schedule;
use crate::domain::value_objects::{AssetCategory, AssetId, DepreciationMethod};
use crate::error::{AssetbookError, AssetbookResult};

/// Asset inputs as entered. Everything optional falls back to a suggestion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculateOptions {
    pub name: String,
    pub category: AssetCategory,
    pub cost: f64,
    pub residual_value: Option<f64>,
    pub useful_life: Option<u32>,
    pub purchase_date: Option<NaiveDate>,
    pub method: DepreciationMethod,
    pub rate: Option<f64>,
    /// Overrides the category's declining rate when `rate` is not given.
    pub default_rate: Option<f64>,
}

impl CalculateOptions {
    /// Fill missing inputs from the category defaults.
    ///
    /// Residual value: explicit, else the category suggestion, else 0.
    /// Useful life: explicit, else the category default.
    /// Rate: only kept for declining-balance; explicit, else `default_rate`,
    /// else the category rate.
    pub fn resolve(self) -> AssetDraft {
        let defaults = self.category.defaults();

        let residual_value = self
            .residual_value
            .or_else(|| self.category.suggested_residual(self.cost))
            .unwrap_or(0.0);
        let useful_life = self.useful_life.unwrap_or(defaults.useful_life);
        let rate = self.rate.filter(|_| self.method.uses_rate());

        let mut draft = AssetDraft {
            name: self.name,
            category: self.category,
            cost: self.cost,
            residual_value,
            useful_life,
            purchase_date: self.purchase_date,
            method: self.method,
            rate,
        };
        draft.fill_rate(self.default_rate);
        draft
    }
}

/// A validated draft together with its freshly computed schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub draft: AssetDraft,
    pub schedule: Schedule,
}

/// Book value position at a selected year of a schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleSummary {
    pub year: u32,
    pub book_value: f64,
    pub accumulated: f64,
    pub years_remaining: u32,
}

pub fn calculate(draft: AssetDraft) -> AssetbookResult<Calculation> {
    validate_asset_input(&draft).map_err(|issues| AssetbookError::InvalidInput { issues })?;

    let schedule = draft.depreciation_input().schedule();
    debug!(
        name = %draft.name,
        method = %draft.method,
        years = draft.useful_life,
        "calculated schedule"
    );

    Ok(Calculation { draft, schedule })
}

impl Calculation {
    /// Summary at `year`, clamped to the end of the useful life.
    pub fn summary(&self, year: u32) -> ScheduleSummary {
        let year = year.min(self.draft.useful_life);
        let (book_value, accumulated) = self
            .schedule
            .get(year)
            .map(|e| (e.book_value, e.accumulated))
            .unwrap_or((self.draft.cost, 0.0));

        ScheduleSummary {
            year,
            book_value,
            accumulated,
            years_remaining: self.draft.useful_life.saturating_sub(year),
        }
    }

    /// Turn the calculation into a register entry. A missing purchase date
    /// becomes `today`; a rate is only kept for declining-balance.
    pub fn into_asset(self, id: AssetId, today: NaiveDate) -> Asset {
        let draft = self.draft;
        Asset {
            id,
            name: draft.name.trim().to_string(),
            category: draft.category,
            cost: draft.cost,
            residual_value: draft.residual_value,
            purchase_date: draft.purchase_date.unwrap_or(today),
            useful_life: draft.useful_life,
            method: draft.method,
            rate: draft.rate.filter(|_| draft.method.uses_rate()),
            schedule: self.schedule,
        }
    }
}
