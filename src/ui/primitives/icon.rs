use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Arrow,
    Calculate,
    Register,
    Suggest,
    Chart,
    Export,
    Import,
    Trash,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Calculate) => theme::icons::CALCULATE,
            (true, Icon::Register) => theme::icons::REGISTER,
            (true, Icon::Suggest) => theme::icons::SUGGEST,
            (true, Icon::Chart) => theme::icons::CHART,
            (true, Icon::Export) => theme::icons::EXPORT,
            (true, Icon::Import) => theme::icons::IMPORT,
            (true, Icon::Trash) => theme::icons::TRASH,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Calculate) => theme::icons_ascii::CALCULATE,
            (false, Icon::Register) => theme::icons_ascii::REGISTER,
            (false, Icon::Suggest) => theme::icons_ascii::SUGGEST,
            (false, Icon::Chart) => theme::icons_ascii::CHART,
            (false, Icon::Export) => theme::icons_ascii::EXPORT,
            (false, Icon::Import) => theme::icons_ascii::IMPORT,
            (false, Icon::Trash) => theme::icons_ascii::TRASH,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Trash => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
            Icon::Calculate
            | Icon::Register
            | Icon::Suggest
            | Icon::Chart
            | Icon::Export
            | Icon::Import => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), theme::icons_ascii::SUCCESS);
        assert_eq!(Icon::Calculate.render(false), "[CALC]");
    }

    #[test]
    fn icon_renders_unicode_when_supported() {
        assert_eq!(Icon::Warning.render(true), theme::icons::WARNING);
    }

    #[test]
    fn colored_without_color_is_plain() {
        assert_eq!(Icon::Register.colored(false, false), "[REGISTER]");
    }
}
