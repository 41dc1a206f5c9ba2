use assetbook::domain::value_objects::AssetCategory;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::format;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};
use crate::ui::widgets::table::{Align, Table};

/// Category guidelines, with a computed residual when a cost is given.
pub struct SuggestView<'a> {
    categories: &'a [AssetCategory],
    cost: Option<f64>,
    currency: &'a str,
}

impl<'a> SuggestView<'a> {
    pub fn new(categories: &'a [AssetCategory], cost: Option<f64>, currency: &'a str) -> Self {
        Self {
            categories,
            cost,
            currency,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Suggest, "Category Guidelines");
        if let Some(cost) = self.cost {
            header.add("Cost", format::money(cost, self.currency));
        }
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        let mut columns = vec![
            ("Category", Align::Left),
            ("Key", Align::Left),
            ("Residual", Align::Right),
        ];
        if self.cost.is_some() {
            columns.push(("Suggested", Align::Right));
        }
        columns.push(("Life", Align::Right));
        columns.push(("DB Rate", Align::Right));

        let mut table = Table::new(&columns);
        for category in self.categories {
            let defaults = category.defaults();
            let mut row = vec![
                category.label().to_string(),
                category.key().to_string(),
                category.residual_range().unwrap_or("-").to_string(),
            ];
            if let Some(cost) = self.cost {
                row.push(
                    category
                        .suggested_residual(cost)
                        .map(format::amount)
                        .unwrap_or_else(|| "-".to_string()),
                );
            }
            row.push(format::years(defaults.useful_life));
            row.push(format::percent(defaults.declining_rate));
            table.add_row(row);
        }

        let mut b = Box::with_title("Depreciation guidelines").style(BoxStyle::Info);
        b.add_lines(table.render_lines(supports_color, supports_unicode));
        out.push_str(&b.render(supports_color, supports_unicode));

        out
    }
}
