//! Rendering for the tree menu.
//!
//! A frame is built as plain lines first ([`render_frame`]) and then written
//! to the terminal by [`draw_frame`]. Building is free of side effects, so two
//! frames over unchanged state are identical.

use std::io::{self, Write};
use std::ops::Range;

use crossterm::{cursor, queue, terminal};

use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme::{self, glyphs};

use super::menu::TreeMenu;
use super::node::TreeNode;

/// Rows taken by the title, controls, two separators and the status line
const CHROME_ROWS: u16 = 5;

/// Fixed drawing parameters for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u16,
    pub height: u16,
    pub caps: TerminalCapabilities,
    /// Show the w/s/e alternate-controls line
    pub alt_controls: bool,
}

impl RenderOptions {
    pub fn new(width: u16, height: u16, caps: TerminalCapabilities) -> Self {
        Self {
            width,
            height,
            caps,
            alt_controls: cfg!(windows),
        }
    }

    /// Tree rows that fit below the header
    pub fn max_rows(&self) -> usize {
        let chrome = CHROME_ROWS + u16::from(self.alt_controls);
        usize::from(self.height.saturating_sub(chrome).max(1))
    }
}

/// Range of projected rows to draw, centred on `selected` when they do not
/// all fit.
pub fn visible_window(len: usize, selected: usize, max_rows: usize) -> Range<usize> {
    if len <= max_rows {
        return 0..len;
    }
    let start = selected.saturating_sub(max_rows / 2).min(len - max_rows);
    start..start + max_rows
}

/// Render one tree row
pub fn render_row(node: &TreeNode, is_selected: bool, caps: &TerminalCapabilities) -> String {
    let indent = glyphs::INDENT.repeat(node.depth());
    let expand = match (node.has_children(), node.expanded) {
        (false, _) => glyphs::LEAF,
        (true, true) => glyphs::EXPANDED,
        (true, false) => glyphs::COLLAPSED,
    };
    let marker = if node.is_executable() {
        glyphs::EXECUTABLE
    } else {
        ""
    };
    let line = format!("{indent}{expand}{marker}{}", node.label());

    if !caps.supports_color {
        let cursor = if is_selected {
            glyphs::CURSOR
        } else {
            glyphs::NO_CURSOR
        };
        return format!("{cursor}{line}");
    }

    let mut text = if node.is_executable() {
        ColoredText::warning(line)
    } else {
        ColoredText::plain(line)
    };
    if is_selected {
        text = text.reversed();
    }
    text.render(true)
}

fn header_lines(options: &RenderOptions) -> Vec<String> {
    let caps = &options.caps;
    let controls = if caps.supports_unicode {
        theme::text::CONTROLS
    } else {
        theme::text::CONTROLS_ASCII
    };
    let mut lines = vec![
        ColoredText::info(theme::text::TITLE).render(caps.supports_color),
        ColoredText::warning(controls).render(caps.supports_color),
    ];
    if options.alt_controls {
        lines.push(ColoredText::warning(theme::text::ALT_CONTROLS).render(caps.supports_color));
    }
    lines.push(theme::separator(options.width, caps.supports_unicode));
    lines
}

/// Default status line describing the selection
pub fn selection_status(menu: &TreeMenu) -> ColoredText {
    match menu.selected_node() {
        Some(node) => {
            let mut status = format!("Selected: {}", node.label());
            if let Some(script) = node.script_path() {
                status.push_str(&format!(
                    " (Press 'x' to execute: {})",
                    script.display()
                ));
            }
            ColoredText::plain(status)
        }
        None => ColoredText::error(theme::text::NO_NODES),
    }
}

/// Build a full frame.
///
/// `status` replaces the default selection line when present.
pub fn render_frame(
    menu: &TreeMenu,
    status: Option<&ColoredText>,
    options: &RenderOptions,
) -> Vec<String> {
    let caps = &options.caps;
    let mut lines = header_lines(options);

    let visible = menu.visible();
    let selected = menu.selected_index();
    let window = visible_window(visible.len(), selected.unwrap_or(0), options.max_rows());
    for i in window {
        if let Some(node) = menu.root().get(&visible[i]) {
            lines.push(render_row(node, selected == Some(i), caps));
        }
    }

    lines.push(theme::separator(options.width, caps.supports_unicode));
    let status = match status {
        Some(message) => message.render(caps.supports_color),
        None => selection_status(menu).render(caps.supports_color),
    };
    lines.push(status);
    lines
}

/// Clear the screen and write `lines`.
///
/// Lines are separated by `\r\n` because raw mode disables output newline
/// translation. The last line gets no terminator, so a frame of exactly
/// terminal height does not scroll.
pub fn draw_frame(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    write!(out, "{}", lines.join("\r\n"))?;
    out.flush()
}

/// Clear the screen only
pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    out.flush()
}
