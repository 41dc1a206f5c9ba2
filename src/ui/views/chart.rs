use assetbook::domain::services::Schedule;

use crate::ui::format;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;
use crate::ui::widgets::r#box::{Box, BoxStyle};

const BAR_WIDTH: usize = 40;
const MIN_BAR_WIDTH: usize = 10;
/// Border, year label and amount columns around a bar.
const CHART_CHROME: usize = 30;

/// Horizontal bars for depreciation and book value per year, scaled to the
/// largest value in either series.
pub struct ChartView<'a> {
    schedule: &'a Schedule,
    currency: &'a str,
    bar_width: usize,
}

impl<'a> ChartView<'a> {
    pub fn new(schedule: &'a Schedule, currency: &'a str) -> Self {
        Self {
            schedule,
            currency,
            bar_width: BAR_WIDTH,
        }
    }

    /// Narrow the bars to fit a terminal `columns` wide.
    pub fn fit_width(mut self, columns: u16) -> Self {
        self.bar_width = usize::from(columns)
            .saturating_sub(CHART_CHROME)
            .clamp(MIN_BAR_WIDTH, BAR_WIDTH);
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (dep_glyph, bv_glyph) = if supports_unicode {
            (theme::bars::DEPRECIATION, theme::bars::BOOK_VALUE)
        } else {
            (theme::bars_ascii::DEPRECIATION, theme::bars_ascii::BOOK_VALUE)
        };

        let title = format!(
            "{} {}",
            Icon::Chart.colored(supports_color, supports_unicode),
            ColoredText::info("Depreciation Chart")
                .bold()
                .render(supports_color)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Info);

        let series = self.schedule.chart_series();
        if series.is_empty() {
            b.add_empty();
            b.add_line(ColoredText::dim("No depreciation periods.").render(supports_color));
            return b.render(supports_color, supports_unicode);
        }

        b.add_line(
            ColoredText::dim(format!(
                "{dep_glyph} Depreciation   {bv_glyph} Book value ({})",
                self.currency.trim()
            ))
            .render(supports_color),
        );
        b.add_empty();

        let max = series
            .iter()
            .flat_map(|p| [p.depreciation, p.book_value])
            .fold(0.0_f64, f64::max);
        let label_width = series
            .last()
            .map(|p| p.year.to_string().len() + 1)
            .unwrap_or(2);

        for point in &series {
            let dep = ColoredText::warning(dep_glyph.repeat(bar_len(point.depreciation, max, self.bar_width)))
                .render(supports_color);
            let bv = ColoredText::info(bv_glyph.repeat(bar_len(point.book_value, max, self.bar_width)))
                .render(supports_color);

            b.add_line(format!(
                "{:>label_width$} {} {}",
                format!("Y{}", point.year),
                dep,
                format::amount(point.depreciation)
            ));
            b.add_line(format!(
                "{:>label_width$} {} {}",
                "",
                bv,
                format::amount(point.book_value)
            ));
        }

        b.render(supports_color, supports_unicode)
    }
}

fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // Non-zero values always get at least one cell.
    (((value / max) * width as f64).round() as usize).clamp(1, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetbook::domain::services::calculate_straight_line;

    #[test]
    fn skips_acquisition_year() {
        let schedule = calculate_straight_line(1_000.0, 0.0, 2);
        let rendered = ChartView::new(&schedule, "₦").render(false, false);

        assert!(rendered.contains("Y1 "));
        assert!(rendered.contains("Y2 "));
        assert!(!rendered.contains("Y0"));
    }

    #[test]
    fn bars_scale_to_largest_value() {
        assert_eq!(bar_len(1_000.0, 1_000.0, BAR_WIDTH), BAR_WIDTH);
        assert_eq!(bar_len(500.0, 1_000.0, BAR_WIDTH), BAR_WIDTH / 2);
        assert_eq!(bar_len(0.0, 1_000.0, BAR_WIDTH), 0);
        assert_eq!(bar_len(0.001, 1_000.0, BAR_WIDTH), 1);
    }

    #[test]
    fn narrow_terminals_shrink_bars() {
        let schedule = calculate_straight_line(1_000.0, 0.0, 1);
        assert_eq!(ChartView::new(&schedule, "₦").fit_width(200).bar_width, BAR_WIDTH);
        assert_eq!(ChartView::new(&schedule, "₦").fit_width(50).bar_width, 20);
        assert_eq!(ChartView::new(&schedule, "₦").fit_width(20).bar_width, MIN_BAR_WIDTH);
    }

    #[test]
    fn empty_schedule_renders_placeholder() {
        let rendered = ChartView::new(&Schedule::default(), "₦").render(false, false);
        assert!(rendered.contains("No depreciation periods."));
    }
}
