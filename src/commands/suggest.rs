//! Suggest command handler

use anyhow::Result;
use serde_json::json;

use assetbook::domain::value_objects::AssetCategory;

use super::CommandContext;
use crate::ui::views::suggest::SuggestView;

pub fn cmd_suggest(
    category: Option<AssetCategory>,
    cost: Option<f64>,
    ctx: &CommandContext,
) -> Result<()> {
    let categories: Vec<AssetCategory> = match category {
        Some(category) => vec![category],
        None => AssetCategory::ALL.to_vec(),
    };
    let cost = cost.filter(|c| c.is_finite() && *c > 0.0);

    if ctx.ui.json {
        let items: Vec<_> = categories
            .iter()
            .map(|category| {
                let defaults = category.defaults();
                json!({
                    "category": category.key(),
                    "label": category.label(),
                    "residualRange": category.residual_range(),
                    "suggestedResidual": cost.and_then(|c| category.suggested_residual(c)),
                    "usefulLife": defaults.useful_life,
                    "decliningRate": defaults.declining_rate,
                })
            })
            .collect();
        crate::ui::json::emit(json!({
            "type": "suggestions",
            "cost": cost,
            "categories": items,
        }))?;
        return Ok(());
    }

    let view = SuggestView::new(&categories, cost, ctx.currency());
    print!("{}", view.render(ctx.ui.color, ctx.ui.unicode));
    Ok(())
}
