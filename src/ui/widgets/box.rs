use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// A rounded (or ASCII) frame around lines of text. Content lines may carry
/// ANSI styling; padding is computed on the visible width.
#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_lines(&mut self, lines: impl IntoIterator<Item = String>) {
        for line in lines {
            self.add_line(line);
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        lines.extend(self.content.iter().cloned());

        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let glyphs = theme::borders(supports_unicode);
        let border = |s: &str| color_border(s, supports_color, self.style);

        let mut out = String::new();
        let top = format!(
            "{}{}{}",
            glyphs.top_left,
            glyphs.horizontal.repeat(inner_width),
            glyphs.top_right
        );
        out.push_str(&border(&top));
        out.push('\n');

        for line in &lines {
            let pad = inner_width.saturating_sub(1 + visible_width(line));
            out.push_str(&border(glyphs.vertical));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push_str(&border(glyphs.vertical));
            out.push('\n');
        }

        let bottom = format!(
            "{}{}{}",
            glyphs.bottom_left,
            glyphs.horizontal.repeat(inner_width),
            glyphs.bottom_right
        );
        out.push_str(&border(&bottom));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool, style: BoxStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        BoxStyle::Info => theme::colors::INFO,
        BoxStyle::Success => theme::colors::SUCCESS,
        BoxStyle::Warning => theme::colors::WARNING,
        BoxStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

/// Display width of `s` once ANSI escape sequences are removed.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final letter>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_splits_multiline_content_into_rows() {
        let mut b = Box::with_title("TITLE");
        b.add_line("Line1\nLine2");
        let rendered = b.render(false, true);

        let line2 = rendered
            .lines()
            .find(|l| l.contains("Line2"))
            .expect("expected Line2 to appear in output");
        assert!(line2.starts_with(theme::BORDERS.vertical));
    }

    #[test]
    fn ascii_box_rows_have_equal_width() {
        let mut b = Box::with_title("Register");
        b.add_line("short");
        b.add_line("a much longer line");
        let rendered = b.render(false, false);

        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(rendered.starts_with("+-"));
    }

    #[test]
    fn visible_width_ignores_ansi() {
        let styled = format!("{}", "₦100".with(theme::colors::INFO));
        assert_eq!(visible_width(&styled), 4);
    }
}
