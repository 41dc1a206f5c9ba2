//! Register command handlers: list, show, update and remove.

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use assetbook::application::Calculation;
use assetbook::domain::entities::{Asset, RegisterQuery, SortKey, SortOrder};
use assetbook::domain::value_objects::{AssetCategory, AssetId, DepreciationMethod};

use super::{asset_json, summary_json, today, CommandContext};
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::chart::ChartView;
use crate::ui::views::register::RegisterView;
use crate::ui::views::schedule::ScheduleView;

pub(crate) fn query(category: Option<AssetCategory>, sort: SortKey, desc: bool) -> RegisterQuery {
    RegisterQuery {
        category,
        sort,
        order: if desc { SortOrder::Desc } else { SortOrder::Asc },
    }
}

pub fn cmd_list(
    category: Option<AssetCategory>,
    sort: SortKey,
    desc: bool,
    ctx: &CommandContext,
) -> Result<()> {
    let today = today();
    let rows = ctx.register().valuations(&query(category, sort, desc), today)?;

    if ctx.ui.json {
        let assets: Vec<_> = rows
            .iter()
            .map(|row| {
                let mut value = asset_json(&row.asset);
                value["currentYear"] = json!(row.valuation.year);
                value["netBookValue"] = json!(row.valuation.book_value);
                value
            })
            .collect();
        crate::ui::json::emit(json!({
            "type": "register",
            "asOf": today,
            "count": assets.len(),
            "assets": assets,
        }))?;
        return Ok(());
    }

    let path = ctx.register_path();
    let view = RegisterView::new(&rows, &path, today, ctx.currency());
    print!("{}", view.render(ctx.ui.color, ctx.ui.unicode));
    Ok(())
}

/// Year since purchase that `today` falls in, capped at the useful life.
fn current_year(asset: &Asset, today: NaiveDate) -> u32 {
    asset.valuation_on(today).year.min(asset.useful_life)
}

pub fn cmd_show(id: &AssetId, year: Option<u32>, chart: bool, ctx: &CommandContext) -> Result<()> {
    let asset = ctx.register().get_asset(id)?;
    print_asset(&asset, year, chart, ctx)
}

fn print_asset(asset: &Asset, year: Option<u32>, chart: bool, ctx: &CommandContext) -> Result<()> {
    let calc = Calculation {
        draft: asset.to_draft(),
        schedule: asset.schedule.clone(),
    };
    let summary = calc.summary(year.unwrap_or_else(|| current_year(asset, today())));

    if ctx.ui.json {
        crate::ui::json::emit(json!({
            "type": "asset",
            "asset": asset_json(asset),
            "schedule": asset.schedule,
            "summary": summary_json(&summary),
        }))?;
        return Ok(());
    }

    let (color, unicode) = (ctx.ui.color, ctx.ui.unicode);
    let view = ScheduleView::new(&calc.draft, &calc.schedule, summary, ctx.currency())
        .with_id(&asset.id);
    print!("{}", view.render(color, unicode));

    if chart {
        println!();
        print!(
            "{}",
            ChartView::new(&asset.schedule, ctx.currency())
                .fit_width(ctx.ui.caps.width)
                .render(color, unicode)
        );
    }
    Ok(())
}

/// Inputs to change on a saved asset; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateArgs {
    pub name: Option<String>,
    pub category: Option<AssetCategory>,
    pub cost: Option<f64>,
    pub residual: Option<f64>,
    pub life: Option<u32>,
    pub method: Option<DepreciationMethod>,
    pub rate: Option<f64>,
    pub date: Option<NaiveDate>,
}

pub fn cmd_update(id: &AssetId, args: UpdateArgs, ctx: &CommandContext) -> Result<()> {
    let revised = ctx.register().revise_asset(id, |draft| {
        if let Some(name) = args.name {
            draft.name = name;
        }
        if let Some(category) = args.category {
            draft.category = category;
        }
        if let Some(cost) = args.cost {
            draft.cost = cost;
        }
        if let Some(residual) = args.residual {
            draft.residual_value = residual;
        }
        if let Some(life) = args.life {
            draft.useful_life = life;
        }
        if let Some(method) = args.method {
            draft.method = method;
        }
        if args.rate.is_some() {
            draft.rate = args.rate;
        }
        if args.date.is_some() {
            draft.purchase_date = args.date;
        }
    })?;

    if !ctx.ui.json {
        let mut summary = ResultSummary::success("Asset Updated");
        summary.add_stat("ID", &revised.id);
        summary.add_stat("Asset", &revised.name);
        print!("{}", summary.render(ctx.ui.color, ctx.ui.unicode));
        println!();
    }
    print_asset(&revised, None, false, ctx)
}

pub fn cmd_remove(id: &AssetId, ctx: &CommandContext) -> Result<()> {
    let removed = ctx.register().remove_asset(id)?;

    if ctx.ui.json {
        crate::ui::json::emit(json!({
            "type": "removed",
            "id": removed.id.as_str(),
            "assetName": removed.name,
        }))?;
        return Ok(());
    }

    println!(
        "{} Removed '{}' ({})",
        Icon::Trash.colored(ctx.ui.color, ctx.ui.unicode),
        removed.name,
        removed.id
    );
    Ok(())
}
