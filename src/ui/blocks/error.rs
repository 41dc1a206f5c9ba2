use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    details: Vec<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Vec::new(),
            fix: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Error);

        b.add_empty();
        b.add_line(self.message.clone());

        if !self.details.is_empty() {
            b.add_empty();
            for detail in &self.details {
                b.add_line(format!("  - {}", detail));
            }
        }

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_details_and_fix() {
        let rendered = ErrorBlock::new("invalid asset")
            .with_detail("cost: must be greater than 0")
            .with_fix("Pass --cost with a positive amount.")
            .render(false, false);

        assert!(rendered.contains("[FAIL] ERROR"));
        assert!(rendered.contains("  - cost: must be greater than 0"));
        assert!(rendered.contains("FIX: Pass --cost"));
    }
}
