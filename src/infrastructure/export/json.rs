//! JSON export

use serde::Serialize;

use crate::domain::entities::{Asset, Register};
use crate::domain::services::ScheduleEntry;
use crate::domain::value_objects::{AssetCategory, DepreciationMethod};
use crate::error::AssetbookResult;
use crate::infrastructure::repositories::render_register;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleDocument<'a> {
    asset_name: &'a str,
    asset_type: AssetCategory,
    method: DepreciationMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    depreciation_rate: Option<f64>,
    currency: &'a str,
    schedule: &'a [ScheduleEntry],
}

/// `<asset name>_depreciation_schedule.json`
pub fn schedule_json_filename(asset_name: &str) -> String {
    format!("{}_depreciation_schedule.json", super::file_stem(asset_name))
}

/// An asset's schedule with enough context to read it on its own.
pub fn render_schedule_json(asset: &Asset, currency: &str) -> AssetbookResult<String> {
    let doc = ScheduleDocument {
        asset_name: &asset.name,
        asset_type: asset.category,
        method: asset.method,
        depreciation_rate: asset.rate,
        currency,
        schedule: asset.schedule.entries(),
    };
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}

/// The register in its storage format, suitable for `assetbook import`.
pub fn render_register_json(register: &Register) -> AssetbookResult<String> {
    Ok(render_register(register)?)
}
