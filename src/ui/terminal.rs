//! Terminal access.
//!
//! [`Terminal`] is the seam between the session and the real console:
//! byte input, output, raw-mode switching and size. [`StdTerminal`] talks to
//! stdin/stdout through crossterm; tests substitute an in-memory terminal.

use std::io::{self, Read, Stdin, Stdout, Write};

use is_terminal::IsTerminal;

/// Fallback geometry when the size cannot be queried
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// Console used by a session
pub trait Terminal: Read + Write {
    /// Switch to raw mode (no echo, no line buffering, no signal keys).
    /// The previous mode is saved for [`Terminal::restore_mode`].
    fn enter_raw_mode(&mut self) -> io::Result<()>;

    /// Return to the mode saved by the last [`Terminal::enter_raw_mode`]
    fn restore_mode(&mut self) -> io::Result<()>;

    /// Current size as `(columns, rows)`
    fn size(&self) -> io::Result<(u16, u16)>;
}

/// The process console: stdin for keys, stdout for drawing
pub struct StdTerminal {
    stdin: Stdin,
    stdout: Stdout,
}

impl StdTerminal {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Read for StdTerminal {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stdin.lock().read(buf)
    }
}

impl Write for StdTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Terminal for StdTerminal {
    fn enter_raw_mode(&mut self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()
    }

    fn restore_mode(&mut self) -> io::Result<()> {
        crossterm::terminal::disable_raw_mode()
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }
}

/// Resolve the geometry used for a whole session.
///
/// Failures and zero dimensions fall back to 80×24 per axis.
pub fn resolve_size(size: io::Result<(u16, u16)>) -> (u16, u16) {
    let (width, height) = size.unwrap_or((0, 0));
    let width = if width == 0 { DEFAULT_WIDTH } else { width };
    let height = if height == 0 { DEFAULT_HEIGHT } else { height };
    (width, height)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
}

impl TerminalCapabilities {
    /// No colour, ASCII glyphs; used for snapshots and dumb terminals
    pub fn plain() -> Self {
        Self {
            is_tty: false,
            supports_color: false,
            supports_unicode: false,
        }
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        io::stdin().is_terminal() && io::stdout().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();

    let supports_color = is_tty && !term_is_dumb && !no_color;
    let supports_unicode = !term_is_dumb && unicode_locale(&get_env);

    TerminalCapabilities {
        is_tty,
        supports_color,
        supports_unicode,
    }
}

/// The first locale variable that is set decides; Windows consoles without
/// one are assumed to handle UTF-8.
fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    match KEYS
        .iter()
        .find_map(|k| get_env(k).filter(|v| !v.is_empty()))
    {
        Some(locale) => {
            let v = locale.to_lowercase();
            v.contains("utf-8") || v.contains("utf8")
        }
        None => cfg!(windows),
    }
}
