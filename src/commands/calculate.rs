//! Calculate command handler

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::json;

use assetbook::application::{calculate, CalculateOptions, Calculation};
use assetbook::domain::services::Schedule;
use assetbook::domain::value_objects::{AssetCategory, AssetId, DepreciationMethod};
use assetbook::infrastructure::export::write_schedule_csv;

use super::{draft_json, summary_json, today, CommandContext};
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::views::chart::ChartView;
use crate::ui::views::schedule::ScheduleView;

#[derive(Debug, Clone)]
pub struct CalculateArgs {
    pub name: String,
    pub category: AssetCategory,
    pub cost: f64,
    pub residual: Option<f64>,
    pub life: Option<u32>,
    pub method: Option<DepreciationMethod>,
    pub rate: Option<f64>,
    pub date: Option<NaiveDate>,
    pub year: Option<u32>,
    pub chart: bool,
    pub save: bool,
    pub csv: Option<PathBuf>,
}

impl CalculateArgs {
    fn options(&self, ctx: &CommandContext) -> CalculateOptions {
        CalculateOptions {
            name: self.name.clone(),
            category: self.category,
            cost: self.cost,
            residual_value: self.residual,
            useful_life: self.life,
            purchase_date: self.date,
            method: self.method.unwrap_or(ctx.config.defaults.method),
            rate: self.rate,
            default_rate: ctx.config.defaults.declining_rate,
        }
    }
}

pub fn cmd_calculate(args: CalculateArgs, ctx: &CommandContext) -> Result<()> {
    let calc = calculate(args.options(ctx).resolve())?;
    // Opens on the first year of depreciation unless --year picks another.
    let summary = calc.summary(args.year.unwrap_or(1));

    if let Some(path) = &args.csv {
        write_csv_file(path, &calc.schedule, ctx.currency())?;
    }

    let saved = if args.save {
        let asset = calc.clone().into_asset(AssetId::generate(), today());
        ctx.register().add_asset(asset.clone())?;
        Some(asset)
    } else {
        None
    };

    if ctx.ui.json {
        let mut asset = draft_json(&calc.draft);
        if let Some(saved) = &saved {
            asset["id"] = json!(saved.id.as_str());
            asset["purchaseDate"] = json!(saved.purchase_date);
        }
        crate::ui::json::emit(json!({
            "type": "schedule",
            "asset": asset,
            "schedule": calc.schedule,
            "summary": summary_json(&summary),
            "saved": saved.is_some(),
            "csv": args.csv.as_ref().map(|p| p.display().to_string()),
        }))?;
        return Ok(());
    }

    let (color, unicode) = (ctx.ui.color, ctx.ui.unicode);
    let mut view = ScheduleView::new(&calc.draft, &calc.schedule, summary, ctx.currency());
    if let Some(saved) = &saved {
        view = view.with_id(&saved.id);
    }
    print!("{}", view.render(color, unicode));

    if args.chart {
        println!();
        print!(
            "{}",
            ChartView::new(&calc.schedule, ctx.currency())
                .fit_width(ctx.ui.caps.width)
                .render(color, unicode)
        );
    }

    if let Some(report) = outcome_summary(&calc, saved.as_ref().map(|a| &a.id), &args.csv) {
        println!();
        print!("{}", report.render(color, unicode));
    }

    Ok(())
}

fn outcome_summary(
    calc: &Calculation,
    saved: Option<&AssetId>,
    csv: &Option<PathBuf>,
) -> Option<ResultSummary> {
    if saved.is_none() && csv.is_none() {
        return None;
    }

    let mut summary = ResultSummary::success(if saved.is_some() {
        "Asset Saved"
    } else {
        "Schedule Exported"
    });
    if let Some(id) = saved {
        summary.add_stat("ID", id);
        summary.add_stat("Asset", calc.draft.name.trim());
        summary.with_next_step(format!("assetbook show {}", id));
    }
    if let Some(path) = csv {
        summary.add_info(format!("Schedule written to {}", path.display()));
    }
    Some(summary)
}

pub(crate) fn write_csv_file(path: &Path, schedule: &Schedule, currency: &str) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_schedule_csv(&mut writer, schedule, currency)?;
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
