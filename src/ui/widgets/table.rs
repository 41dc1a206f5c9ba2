use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::visible_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Plain column layout; rows are padded on visible width so styled cells line up.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<(String, Align)>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[(&str, Align)]) -> Self {
        Self {
            headers: headers
                .iter()
                .map(|(h, a)| (h.to_string(), *a))
                .collect(),
            rows: Vec::new(),
            footer: None,
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn set_footer(&mut self, cells: Vec<String>) {
        self.footer = Some(cells);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|(h, _)| h.len()).collect();
        for row in self.rows.iter().chain(self.footer.iter()) {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(visible_width(cell));
                }
            }
        }
        widths
    }

    fn format_row(&self, cells: &[String], widths: &[usize]) -> String {
        let parts: Vec<String> = self
            .headers
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, ((_, align), width))| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = " ".repeat(width.saturating_sub(visible_width(cell)));
                match align {
                    Align::Left => format!("{cell}{pad}"),
                    Align::Right => format!("{pad}{cell}"),
                }
            })
            .collect();
        parts.join("  ").trim_end().to_string()
    }

    pub fn render_lines(&self, supports_color: bool, supports_unicode: bool) -> Vec<String> {
        let widths = self.widths();
        let header_cells: Vec<String> = self.headers.iter().map(|(h, _)| h.clone()).collect();
        let rule_char = if supports_unicode { "─" } else { "-" };
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let mut lines = vec![ColoredText::plain(self.format_row(&header_cells, &widths))
            .bold()
            .render(supports_color)];
        lines.push(ColoredText::dim(&rule_char.repeat(total)).render(supports_color));
        for row in &self.rows {
            lines.push(self.format_row(row, &widths));
        }
        if let Some(footer) = &self.footer {
            lines.push(ColoredText::dim(&rule_char.repeat(total)).render(supports_color));
            lines.push(ColoredText::plain(self.format_row(footer, &widths))
                    .bold()
                    .render(supports_color));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_aligned_columns_line_up() {
        let mut table = Table::new(&[("Name", Align::Left), ("Cost", Align::Right)]);
        table.add_row(vec!["Van".into(), "25,000.00".into()]);
        table.add_row(vec!["Laptop".into(), "900.00".into()]);

        let lines = table.render_lines(false, false);
        assert_eq!(lines[0], "Name         Cost");
        assert_eq!(lines[2], "Van     25,000.00");
        assert_eq!(lines[3], "Laptop     900.00");
    }

    #[test]
    fn footer_is_separated_by_rule() {
        let mut table = Table::new(&[("Name", Align::Left), ("NBV", Align::Right)]);
        table.add_row(vec!["Van".into(), "1.00".into()]);
        table.set_footer(vec!["Total".into(), "1.00".into()]);

        let lines = table.render_lines(false, false);
        assert_eq!(lines.len(), 5);
        assert!(lines[3].chars().all(|c| c == '-'));
        assert!(lines[4].starts_with("Total"));
    }
}
