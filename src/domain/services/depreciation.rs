//! Depreciation calculation engine
//!
//! Turns an asset's cost basis, residual value and useful life into a
//! year-by-year schedule. Both calculators are total functions: they never
//! fail and never validate their input. Boundary checks live in
//! [`crate::domain::policies`].
//!
//! A schedule always starts with the acquisition entry (year 0) and holds one
//! entry per year of useful life after that.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DepreciationMethod;

/// Percentage applied by the declining-balance method when no rate is given.
pub const DEFAULT_DECLINING_RATE: f64 = 20.0;

/// One year of a depreciation schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// 0 is the acquisition year; 1..=useful_life are depreciation periods.
    pub year: u32,
    pub depreciation: f64,
    pub accumulated: f64,
    pub book_value: f64,
}

impl ScheduleEntry {
    fn acquisition(cost: f64) -> Self {
        Self {
            year: 0,
            depreciation: 0.0,
            accumulated: 0.0,
            book_value: cost,
        }
    }
}

/// A point of the chart series (depreciation and book value for one year).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub year: u32,
    pub depreciation: f64,
    pub book_value: f64,
}

/// Ordered, immutable sequence of schedule entries (years ascending from 0).
///
/// There is no way to mutate a schedule in place; recalculating produces a
/// new one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    /// Entry for `year`, if the schedule covers it.
    pub fn get(&self, year: u32) -> Option<&ScheduleEntry> {
        match self.entries.get(year as usize) {
            Some(entry) if entry.year == year => Some(entry),
            _ => self.entries.iter().find(|e| e.year == year),
        }
    }

    pub fn last(&self) -> Option<&ScheduleEntry> {
        self.entries.last()
    }

    /// Number of depreciation periods covered (entries after year 0).
    pub fn useful_life(&self) -> u32 {
        self.entries.last().map(|e| e.year).unwrap_or(0)
    }

    /// Series plotted by the chart view. Year 0 carries no depreciation and
    /// is left out.
    pub fn chart_series(&self) -> Vec<ChartPoint> {
        self.entries
            .iter()
            .filter(|e| e.year > 0)
            .map(|e| ChartPoint {
                year: e.year,
                depreciation: e.depreciation,
                book_value: e.book_value,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The numbers a calculator needs, detached from any stored asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepreciationInput {
    pub cost: f64,
    pub residual_value: f64,
    pub useful_life: u32,
    pub method: DepreciationMethod,
    /// Declining-balance rate in percent. Ignored by straight-line.
    pub rate: Option<f64>,
}

impl DepreciationInput {
    pub fn schedule(&self) -> Schedule {
        match self.method {
            DepreciationMethod::StraightLine => {
                calculate_straight_line(self.cost, self.residual_value, self.useful_life)
            }
            DepreciationMethod::DecliningBalance => calculate_declining_balance(
                self.cost,
                self.residual_value,
                self.useful_life,
                self.rate,
            ),
        }
    }
}

/// Constant annual depreciation of `(cost - residual_value) / useful_life`.
///
/// Book value is floored at `residual_value` every year. With a residual
/// above cost the annual amount is negative and the floor pins every book
/// value to the residual.
pub fn calculate_straight_line(cost: f64, residual_value: f64, useful_life: u32) -> Schedule {
    let depreciable_amount = cost - residual_value;
    let annual_depreciation = depreciable_amount / f64::from(useful_life);

    let mut entries = Vec::with_capacity(useful_life as usize + 1);
    entries.push(ScheduleEntry::acquisition(cost));

    for year in 1..=useful_life {
        let accumulated = f64::from(year) * annual_depreciation;
        // Cumulative rounding can leave the last year a hair under the floor.
        let book_value = (cost - accumulated).max(residual_value);

        entries.push(ScheduleEntry {
            year,
            depreciation: annual_depreciation,
            accumulated,
            book_value,
        });
    }

    Schedule { entries }
}

/// Depreciates `rate` percent of the previous year's book value, never going
/// below `residual_value`.
///
/// Once the floor is reached the remaining years carry zero depreciation, a
/// frozen accumulated total and a book value equal to the residual. `rate`
/// defaults to [`DEFAULT_DECLINING_RATE`].
pub fn calculate_declining_balance(
    cost: f64,
    residual_value: f64,
    useful_life: u32,
    rate: Option<f64>,
) -> Schedule {
    let declining_rate = rate.unwrap_or(DEFAULT_DECLINING_RATE) / 100.0;

    let mut entries = Vec::with_capacity(useful_life as usize + 1);
    entries.push(ScheduleEntry::acquisition(cost));

    let mut current_book_value = cost;
    let mut accumulated = 0.0;

    for year in 1..=useful_life {
        let mut depreciation = current_book_value * declining_rate;

        if current_book_value - depreciation < residual_value {
            depreciation = current_book_value - residual_value;
        }
        // Already at or under the floor.
        if depreciation < 0.0 {
            depreciation = 0.0;
        }

        accumulated += depreciation;
        current_book_value -= depreciation;

        entries.push(ScheduleEntry {
            year,
            depreciation,
            accumulated,
            book_value: current_book_value.max(residual_value),
        });

        if current_book_value <= residual_value {
            entries.extend((year + 1..=useful_life).map(|remaining| ScheduleEntry {
                year: remaining,
                depreciation: 0.0,
                accumulated,
                book_value: residual_value,
            }));
            break;
        }
    }

    Schedule { entries }
}
