use crossterm::style::Color;

/// Design tokens for the assetbook terminal UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons, borders and chart glyphs must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const CALCULATE: &str = "🧮";
    pub const REGISTER: &str = "📒";
    pub const SUGGEST: &str = "💡";
    pub const CHART: &str = "📉";
    pub const EXPORT: &str = "📤";
    pub const IMPORT: &str = "📥";
    pub const TRASH: &str = "🗑";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PENDING: &str = "[ ]";
    pub const ARROW: &str = "[>]";

    pub const CALCULATE: &str = "[CALC]";
    pub const REGISTER: &str = "[REGISTER]";
    pub const SUGGEST: &str = "[TIP]";
    pub const CHART: &str = "[CHART]";
    pub const EXPORT: &str = "[EXPORT]";
    pub const IMPORT: &str = "[IMPORT]";
    pub const TRASH: &str = "[DEL]";
}

/// Box-drawing glyphs for one rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

pub const BORDERS: BorderSet = BorderSet {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal: "─",
    vertical: "│",
};

pub const BORDERS_ASCII: BorderSet = BorderSet {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    horizontal: "-",
    vertical: "|",
};

pub fn borders(supports_unicode: bool) -> BorderSet {
    if supports_unicode {
        BORDERS
    } else {
        BORDERS_ASCII
    }
}

/// Bar glyphs for the depreciation chart.
pub mod bars {
    pub const DEPRECIATION: &str = "█";
    pub const BOOK_VALUE: &str = "░";
}

pub mod bars_ascii {
    pub const DEPRECIATION: &str = "#";
    pub const BOOK_VALUE: &str = "=";
}
