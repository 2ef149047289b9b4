use crossterm::style::Color;

/// Design tokens for the dui terminal UI.
///
/// All colours, glyphs and fixed strings used by the renderer live here.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
}

pub mod glyphs {
    /// Branch with children, currently shown
    pub const EXPANDED: &str = "- ";
    /// Branch with children, currently hidden
    pub const COLLAPSED: &str = "+ ";
    /// Leaf or childless node
    pub const LEAF: &str = "  ";
    /// Prefix for nodes that launch a script
    pub const EXECUTABLE: &str = "[x] ";
    /// One level of indentation
    pub const INDENT: &str = "  ";
    /// Cursor shown when reverse video is unavailable
    pub const CURSOR: &str = "> ";
    pub const NO_CURSOR: &str = "  ";
}

pub mod borders {
    pub const HORIZONTAL: &str = "─";
}

pub mod borders_ascii {
    pub const HORIZONTAL: &str = "-";
}

pub mod text {
    pub const TITLE: &str = "Developer User Interface";
    pub const CONTROLS: &str =
        "Controls: ↑/↓ = navigate, Enter/Space = expand/collapse, x = execute script, q = quit";
    pub const CONTROLS_ASCII: &str =
        "Controls: Up/Down = navigate, Enter/Space = expand/collapse, x = execute script, q = quit";
    pub const ALT_CONTROLS: &str = "Alternate controls: w/s = up/down, e = expand/collapse";
    pub const NO_NODES: &str = "No nodes available";
}

/// Horizontal rule `width` cells wide
pub fn separator(width: u16, supports_unicode: bool) -> String {
    let unit = if supports_unicode {
        borders::HORIZONTAL
    } else {
        borders_ascii::HORIZONTAL
    };
    unit.repeat(usize::from(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_spans_width() {
        assert_eq!(separator(4, true), "────");
        assert_eq!(separator(3, false), "---");
        assert_eq!(separator(0, true), "");
    }

    #[test]
    fn expand_glyphs_have_equal_width() {
        assert_eq!(glyphs::EXPANDED.len(), glyphs::LEAF.len());
        assert_eq!(glyphs::COLLAPSED.len(), glyphs::LEAF.len());
        assert_eq!(glyphs::CURSOR.len(), glyphs::NO_CURSOR.len());
    }
}
