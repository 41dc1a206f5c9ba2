use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};
use assetbook::config::ConfigWarning;

#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// One line per unknown config key, with a "did you mean" hint when known.
    pub fn from_config_warnings(warnings: &[ConfigWarning]) -> Self {
        let mut block = Self::new("Config warnings");
        for w in warnings {
            let location = match w.line {
                Some(line) => format!("{}:{}", w.file.display(), line),
                None => w.file.display().to_string(),
            };
            let mut line = format!("Unknown key '{}' in {}", w.key, location);
            if let Some(suggestion) = &w.suggestion {
                line.push_str(&format!(" (did you mean '{}'?)", suggestion));
            }
            block.add_line(line);
        }
        block
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            self.title
        );
        let mut b = Box::with_title(header).style(BoxStyle::Warning);
        for line in &self.lines {
            b.add_line(line.clone());
        }
        b.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn config_warning_shows_location_and_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "currancy".to_string(),
            file: PathBuf::from("config.toml"),
            line: Some(2),
            suggestion: Some("currency".to_string()),
        }];

        let rendered = WarningBlock::from_config_warnings(&warnings).render(false, false);
        assert!(rendered.contains("Unknown key 'currancy' in config.toml:2"));
        assert!(rendered.contains("did you mean 'currency'?"));
    }
}
