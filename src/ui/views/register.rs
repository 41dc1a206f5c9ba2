use std::path::Path;

use chrono::NaiveDate;

use assetbook::application::RegisterRow;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::format;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};
use crate::ui::widgets::table::{Align, Table};

pub struct RegisterView<'a> {
    rows: &'a [RegisterRow],
    register_path: &'a Path,
    today: NaiveDate,
    currency: &'a str,
}

impl<'a> RegisterView<'a> {
    pub fn new(
        rows: &'a [RegisterRow],
        register_path: &'a Path,
        today: NaiveDate,
        currency: &'a str,
    ) -> Self {
        Self {
            rows,
            register_path,
            today,
            currency,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Register, "Asset Register");
        header.add("Register", self.register_path.display().to_string());
        header.add("Assets", self.rows.len().to_string());
        header.add("As of", self.today.to_string());
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        if self.rows.is_empty() {
            out.push_str(&format!(
                "{} {}\n\n{}\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::dim("No assets found.").render(supports_color),
                ColoredText::dim("Run `assetbook calculate --save` to add one.")
                    .render(supports_color)
            ));
            return out;
        }

        let mut table = Table::new(&[
            ("ID", Align::Left),
            ("Name", Align::Left),
            ("Type", Align::Left),
            ("Cost", Align::Right),
            ("Purchased", Align::Left),
            ("Life", Align::Right),
            ("Method", Align::Left),
            ("NBV", Align::Right),
        ]);

        let mut total_cost = 0.0;
        let mut total_nbv = 0.0;
        for row in self.rows {
            let asset = &row.asset;
            total_cost += asset.cost;
            total_nbv += row.valuation.book_value;

            table.add_row(vec![
                ColoredText::dim(asset.id.as_str()).render(supports_color),
                asset.name.clone(),
                asset.category.key().to_string(),
                format::amount(asset.cost),
                asset.purchase_date.to_string(),
                asset.useful_life.to_string(),
                asset.method.label().to_string(),
                format::amount(row.valuation.book_value),
            ]);
        }
        table.set_footer(vec![
            "Total".to_string(),
            String::new(),
            String::new(),
            format::amount(total_cost),
            String::new(),
            String::new(),
            String::new(),
            format::amount(total_nbv),
        ]);

        let mut b = Box::with_title(format!("Assets ({})", self.currency.trim()))
            .style(BoxStyle::Info);
        b.add_lines(table.render_lines(supports_color, supports_unicode));
        out.push_str(&b.render(supports_color, supports_unicode));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetbook::application::{calculate, CalculateOptions};
    use assetbook::domain::value_objects::{AssetCategory, AssetId};

    fn row(name: &str, cost: f64) -> RegisterRow {
        let purchased = NaiveDate::from_ymd_opt(2022, 1, 10).unwrap();
        let draft = CalculateOptions {
            name: name.to_string(),
            category: AssetCategory::Computers,
            cost,
            residual_value: Some(0.0),
            useful_life: Some(4),
            purchase_date: Some(purchased),
            ..CalculateOptions::default()
        }
        .resolve();
        let asset = calculate(draft)
            .unwrap()
            .into_asset(name.parse::<AssetId>().unwrap(), purchased);
        let valuation = asset.valuation_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        RegisterRow { asset, valuation }
    }

    #[test]
    fn empty_register_shows_hint() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let rendered =
            RegisterView::new(&[], Path::new("register.json"), today, "₦").render(false, false);
        assert!(rendered.contains("No assets found."));
        assert!(rendered.contains("assetbook calculate --save"));
    }

    #[test]
    fn rows_and_totals() {
        let rows = vec![row("laptop", 4_000.0), row("printer", 2_000.0)];
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let rendered =
            RegisterView::new(&rows, Path::new("register.json"), today, "₦").render(false, false);

        assert!(rendered.contains("laptop"));
        assert!(rendered.contains("computers"));
        // Year 2 of 4: half the cost remains.
        assert!(rendered.contains("2,000.00"));
        let total = rendered
            .lines()
            .find(|l| l.contains("Total"))
            .expect("total row");
        assert!(total.contains("6,000.00"));
        assert!(total.contains("3,000.00"));
    }
}
