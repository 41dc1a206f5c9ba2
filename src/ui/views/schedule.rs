use assetbook::application::ScheduleSummary;
use assetbook::domain::entities::AssetDraft;
use assetbook::domain::services::Schedule;
use assetbook::domain::value_objects::AssetId;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::format;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};
use crate::ui::widgets::table::{Align, Table};

/// Inputs, year-by-year table and the summary block for one schedule.
pub struct ScheduleView<'a> {
    draft: &'a AssetDraft,
    schedule: &'a Schedule,
    summary: ScheduleSummary,
    currency: &'a str,
    id: Option<&'a AssetId>,
}

impl<'a> ScheduleView<'a> {
    pub fn new(
        draft: &'a AssetDraft,
        schedule: &'a Schedule,
        summary: ScheduleSummary,
        currency: &'a str,
    ) -> Self {
        Self {
            draft,
            schedule,
            summary,
            currency,
            id: None,
        }
    }

    pub fn with_id(mut self, id: &'a AssetId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let money = |v: f64| format::money(v, self.currency);

        let mut header = CommandHeader::new(Icon::Calculate, "Depreciation Schedule");
        header.add("Asset", self.draft.name.trim());
        if let Some(id) = self.id {
            header.add("ID", id.to_string());
        }
        header.add("Category", self.draft.category.label());
        let method = match self.draft.rate.filter(|_| self.draft.method.uses_rate()) {
            Some(rate) => format!("{} ({})", self.draft.method, format::percent(rate)),
            None => self.draft.method.to_string(),
        };
        header.add("Method", method);
        header.add("Cost", money(self.draft.cost));
        header.add("Residual value", money(self.draft.residual_value));
        header.add("Useful life", format::years(self.draft.useful_life));
        if let Some(date) = self.draft.purchase_date {
            header.add("Purchased", date.to_string());
        }
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        let mut table = Table::new(&[
            ("Year", Align::Right),
            ("Depreciation", Align::Right),
            ("Accumulated", Align::Right),
            ("Book Value", Align::Right),
        ]);
        for entry in self.schedule {
            let year = if entry.year == self.summary.year {
                ColoredText::info(entry.year.to_string())
                    .bold()
                    .render(supports_color)
            } else {
                entry.year.to_string()
            };
            table.add_row(vec![
                year,
                format::amount(entry.depreciation),
                format::amount(entry.accumulated),
                format::amount(entry.book_value),
            ]);
        }

        let mut b = Box::with_title(format!("Schedule ({})", self.currency.trim()))
            .style(BoxStyle::Info);
        b.add_lines(table.render_lines(supports_color, supports_unicode));
        out.push_str(&b.render(supports_color, supports_unicode));
        out.push('\n');

        let mut summary = ResultSummary::success(format!("Year {} Summary", self.summary.year));
        summary.add_stat("Book value", money(self.summary.book_value));
        summary.add_stat("Accumulated depreciation", money(self.summary.accumulated));
        summary.add_stat("Years remaining", self.summary.years_remaining);
        out.push_str(&summary.render(supports_color, supports_unicode));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetbook::application::{calculate, CalculateOptions};
    use assetbook::domain::value_objects::{AssetCategory, DepreciationMethod};

    fn van() -> assetbook::application::Calculation {
        let draft = CalculateOptions {
            name: "Delivery Van".to_string(),
            category: AssetCategory::Vehicles,
            cost: 10_000.0,
            residual_value: Some(0.0),
            useful_life: Some(4),
            method: DepreciationMethod::StraightLine,
            ..CalculateOptions::default()
        }
        .resolve();
        calculate(draft).unwrap()
    }

    #[test]
    fn renders_every_year_and_the_summary() {
        let calc = van();
        let rendered =
            ScheduleView::new(&calc.draft, &calc.schedule, calc.summary(2), "₦").render(false, false);

        assert!(rendered.contains("[CALC] Depreciation Schedule"));
        assert!(rendered.contains("Motor Vehicles"));
        assert!(rendered.contains("2,500.00"));
        assert!(rendered.contains("Year 2 Summary"));
        assert!(rendered.contains("Book value:"));
        assert!(rendered.contains("₦5,000.00"));
    }

    #[test]
    fn straight_line_hides_rate() {
        let mut calc = van();
        calc.draft.rate = Some(40.0);
        let rendered =
            ScheduleView::new(&calc.draft, &calc.schedule, calc.summary(4), "₦").render(false, false);
        assert!(!rendered.contains("40%"));
    }
}
