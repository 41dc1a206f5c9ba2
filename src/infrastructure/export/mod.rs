//! Export writers
//!
//! Schedules and register listings as CSV (spreadsheet import), JSON or PDF.
//! CSV and PDF share the same headers and rows.

pub mod csv;
pub mod json;
pub mod pdf;

pub use self::csv::{
    schedule_csv_filename, write_register_csv, write_schedule_csv, REGISTER_CSV_FILENAME,
};
pub use self::json::{render_register_json, render_schedule_json, schedule_json_filename};
pub use self::pdf::{schedule_pdf_filename, PdfReport, REGISTER_PDF_FILENAME};

use crate::domain::entities::{Asset, AssetValuation};
use crate::domain::services::ScheduleEntry;

pub(crate) const REGISTER_HEADERS: [&str; 7] = [
    "Asset Name",
    "Type",
    "Purchase Cost",
    "Purchase Date",
    "Useful Life",
    "Method",
    "Current NBV",
];

pub(crate) fn schedule_headers(currency: &str) -> [String; 4] {
    [
        "Year".to_string(),
        format!("Depreciation ({currency})"),
        format!("Accumulated Depreciation ({currency})"),
        format!("Book Value ({currency})"),
    ]
}

pub(crate) fn schedule_record(entry: &ScheduleEntry) -> [String; 4] {
    [
        entry.year.to_string(),
        amount(entry.depreciation),
        amount(entry.accumulated),
        amount(entry.book_value),
    ]
}

pub(crate) fn register_record(asset: &Asset, valuation: &AssetValuation) -> [String; 7] {
    [
        asset.name.clone(),
        asset.category.key().to_string(),
        amount(asset.cost),
        asset.purchase_date.format("%Y-%m-%d").to_string(),
        asset.useful_life.to_string(),
        asset.method.label().to_string(),
        amount(valuation.book_value),
    ]
}

/// Two decimals, no thousands separators.
fn amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// File name stem for an asset: whitespace runs become `_`.
pub fn file_stem(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}
