//! Command handlers
//!
//! Each handler runs one subcommand and prints either the terminal view or a
//! single JSON document.

pub mod calculate;
pub mod export;
pub mod import;
pub mod project_root;
pub mod register;
pub mod suggest;

use std::path::PathBuf;

use chrono::NaiveDate;
use serde_json::{json, Value};

use assetbook::application::{RegisterUseCase, ScheduleSummary};
use assetbook::config::Config;
use assetbook::domain::entities::{Asset, AssetDraft};
use assetbook::presentation::factory;

use crate::ui::context::UiContext;

/// Everything a handler needs besides its own arguments.
pub struct CommandContext {
    pub ui: UiContext,
    pub config: Config,
    pub register_override: Option<PathBuf>,
}

impl CommandContext {
    pub fn register_path(&self) -> PathBuf {
        factory::register_path(&self.config, self.register_override.as_deref())
    }

    pub fn register(&self) -> RegisterUseCase {
        factory::create_register_use_case(&self.config, self.register_override.as_deref())
    }

    pub fn currency(&self) -> &str {
        &self.ui.currency
    }
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub(crate) fn draft_json(draft: &AssetDraft) -> Value {
    json!({
        "assetName": draft.name.trim(),
        "assetType": draft.category.key(),
        "purchaseCost": draft.cost,
        "residualValue": draft.residual_value,
        "purchaseDate": draft.purchase_date,
        "usefulLife": draft.useful_life,
        "method": draft.method.label(),
        "depreciationRate": draft.rate.filter(|_| draft.method.uses_rate()),
    })
}

pub(crate) fn asset_json(asset: &Asset) -> Value {
    let mut value = draft_json(&asset.to_draft());
    value["id"] = json!(asset.id.as_str());
    value
}

pub(crate) fn summary_json(summary: &ScheduleSummary) -> Value {
    json!({
        "year": summary.year,
        "bookValue": summary.book_value,
        "accumulatedDepreciation": summary.accumulated,
        "yearsRemaining": summary.years_remaining,
    })
}
