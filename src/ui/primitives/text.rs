use crossterm::style::{Attribute, Stylize};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    reversed: bool,
}

impl ColoredText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            reversed: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Warning)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Info)
    }

    fn with_color(mut self, color: SemanticColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Swap foreground and background (selection highlight)
    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let mut styled = match self.color {
            Some(SemanticColor::Success) => self.text.as_str().with(theme::colors::SUCCESS),
            Some(SemanticColor::Error) => self.text.as_str().with(theme::colors::ERROR),
            Some(SemanticColor::Warning) => self.text.as_str().with(theme::colors::WARNING),
            Some(SemanticColor::Info) => self.text.as_str().with(theme::colors::INFO),
            None => self.text.as_str().stylize(),
        };

        if self.reversed {
            styled = styled.attribute(Attribute::Reverse);
        }

        format!("{}", styled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_color_returns_plain_text() {
        let t = ColoredText::success("ok").reversed();
        assert_eq!(t.render(false), "ok");
    }

    #[test]
    fn render_with_color_includes_ansi_escape() {
        let t = ColoredText::error("no");
        let rendered = t.render(true);
        assert!(rendered.contains("\u{1b}["));
    }

    #[test]
    fn reversed_uses_reverse_video() {
        let rendered = ColoredText::plain("row").reversed().render(true);
        assert!(rendered.contains("\u{1b}[7m"), "{rendered:?}");
        assert!(rendered.contains("row"));
    }

    #[test]
    fn plain_with_color_has_no_escape() {
        assert_eq!(ColoredText::plain("row").render(true), "row");
    }
}
