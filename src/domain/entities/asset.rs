//! Asset entity
//!
//! An `Asset` is the unit stored in the register: the inputs of a calculation
//! together with the schedule computed from them. An `AssetDraft` holds the
//! same inputs before validation and before an id is assigned.

use chrono::{Datelike, NaiveDate};

use crate::domain::services::{DepreciationInput, Schedule};
use crate::domain::value_objects::{AssetCategory, AssetId, DepreciationMethod};

/// Unvalidated asset inputs, as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDraft {
    pub name: String,
    pub category: AssetCategory,
    pub cost: f64,
    pub residual_value: f64,
    pub useful_life: u32,
    /// Defaults to the day the asset is saved.
    pub purchase_date: Option<NaiveDate>,
    pub method: DepreciationMethod,
    /// Declining-balance rate in percent; `None` for straight-line.
    pub rate: Option<f64>,
}

impl AssetDraft {
    pub fn depreciation_input(&self) -> DepreciationInput {
        DepreciationInput {
            cost: self.cost,
            residual_value: self.residual_value,
            useful_life: self.useful_life,
            method: self.method,
            rate: self.rate,
        }
    }

    /// Give a declining-balance draft without a rate the configured default,
    /// else its category's rate. Straight-line drafts are left alone.
    pub fn fill_rate(&mut self, default_rate: Option<f64>) {
        if self.method.uses_rate() && self.rate.is_none() {
            self.rate = Some(
                default_rate.unwrap_or_else(|| self.category.defaults().declining_rate),
            );
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub category: AssetCategory,
    pub cost: f64,
    pub residual_value: f64,
    pub purchase_date: NaiveDate,
    pub useful_life: u32,
    pub method: DepreciationMethod,
    pub rate: Option<f64>,
    pub schedule: Schedule,
}

/// Depreciation and book value of an asset for one schedule year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetValuation {
    pub year: u32,
    pub depreciation: f64,
    pub book_value: f64,
}

impl Asset {
    pub fn depreciation_input(&self) -> DepreciationInput {
        DepreciationInput {
            cost: self.cost,
            residual_value: self.residual_value,
            useful_life: self.useful_life,
            method: self.method,
            rate: self.rate,
        }
    }

    pub fn to_draft(&self) -> AssetDraft {
        AssetDraft {
            name: self.name.clone(),
            category: self.category,
            cost: self.cost,
            residual_value: self.residual_value,
            useful_life: self.useful_life,
            purchase_date: Some(self.purchase_date),
            method: self.method,
            rate: self.rate,
        }
    }

    /// Valuation for the schedule year `date` falls in, counted in calendar
    /// years since purchase.
    ///
    /// Dates before the purchase year report the acquisition entry. Dates
    /// past the end of the schedule report the final book value with no
    /// further depreciation.
    pub fn valuation_on(&self, date: NaiveDate) -> AssetValuation {
        let elapsed = date.year() - self.purchase_date.year();
        let year = match u32::try_from(elapsed) {
            Ok(year) => year,
            Err(_) => {
                return AssetValuation {
                    year: 0,
                    depreciation: 0.0,
                    book_value: self.cost,
                }
            }
        };

        if let Some(entry) = self.schedule.get(year) {
            return AssetValuation {
                year,
                depreciation: entry.depreciation,
                book_value: entry.book_value,
            };
        }

        let book_value = self
            .schedule
            .last()
            .map(|e| e.book_value)
            .unwrap_or(self.cost);
        AssetValuation {
            year,
            depreciation: 0.0,
            book_value,
        }
    }

    pub fn years_remaining(&self, year: u32) -> u32 {
        self.useful_life.saturating_sub(year)
    }
}
