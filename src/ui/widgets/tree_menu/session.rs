//! Interactive session: the read → apply → render loop.
//!
//! The session is the only code that changes the terminal mode. Raw mode is
//! on while the menu is being navigated and off while a script owns the
//! terminal. Dropping a session restores the saved mode if raw mode is
//! still active, so every exit path leaves the terminal usable.

use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{DuiError, DuiResult};
use crate::script::{ProcessRunner, ScriptError, ScriptRunner};
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::{resolve_size, Terminal, TerminalCapabilities};

use super::input::{read_command, Command};
use super::menu::TreeMenu;
use super::node::TreeNode;
use super::render::{clear_screen, draw_frame, render_frame, RenderOptions};

/// Pause after a failed or empty read before trying again
pub const DEFAULT_READ_BACKOFF: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Not started yet, or the menu is being navigated
    Running,
    /// A script owns the terminal
    AwaitingExternal,
    Stopped,
}

/// One interactive run over a menu tree
pub struct Session<T: Terminal, R: ScriptRunner = ProcessRunner> {
    terminal: T,
    runner: R,
    menu: TreeMenu,
    options: RenderOptions,
    state: SessionState,
    raw_mode: bool,
    status: Option<ColoredText>,
    read_backoff: Duration,
}

impl<T: Terminal> Session<T, ProcessRunner> {
    /// Session that runs scripts as child processes
    pub fn new(root: TreeNode, terminal: T, caps: TerminalCapabilities) -> Self {
        Self::with_runner(root, terminal, ProcessRunner, caps)
    }
}

impl<T: Terminal, R: ScriptRunner> Session<T, R> {
    /// Session with a custom script runner.
    ///
    /// The terminal size is read once here and kept for the whole session.
    pub fn with_runner(root: TreeNode, terminal: T, runner: R, caps: TerminalCapabilities) -> Self {
        let (width, height) = resolve_size(terminal.size());
        debug!(width, height, "terminal geometry");
        Self {
            terminal,
            runner,
            menu: TreeMenu::new(root),
            options: RenderOptions::new(width, height, caps),
            state: SessionState::Running,
            raw_mode: false,
            status: None,
            read_backoff: DEFAULT_READ_BACKOFF,
        }
    }

    pub fn with_read_backoff(mut self, backoff: Duration) -> Self {
        self.read_backoff = backoff;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn menu(&self) -> &TreeMenu {
        &self.menu
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Status message waiting for the next render
    pub fn status_message(&self) -> Option<&ColoredText> {
        self.status.as_ref()
    }

    /// Whether raw mode is currently active
    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Run until the user quits.
    ///
    /// The saved terminal mode is restored before returning, on success and
    /// on error alike.
    pub fn run(&mut self) -> DuiResult<()> {
        let result = self.start().and_then(|()| {
            while self.state != SessionState::Stopped {
                self.step()?;
            }
            Ok(())
        });
        self.restore_terminal();
        result
    }

    /// Enter raw mode, open the root and draw the first frame
    pub fn start(&mut self) -> DuiResult<()> {
        self.enter_raw_mode()?;
        self.menu.expand_root();
        self.state = SessionState::Running;
        self.render()
    }

    /// Read one key press and apply it.
    ///
    /// A failed or empty read counts as no input and is followed by a short
    /// pause.
    pub fn step(&mut self) -> DuiResult<()> {
        match read_command(&mut self.terminal) {
            Ok(Some(command)) => self.apply(command),
            Ok(None) => Ok(()),
            Err(err) => {
                warn!(%err, "input read failed");
                std::thread::sleep(self.read_backoff);
                Ok(())
            }
        }
    }

    /// Apply a decoded command, re-rendering when the view changed
    pub fn apply(&mut self, command: Command) -> DuiResult<()> {
        debug!(?command, "apply");
        match command {
            Command::MoveUp => {
                if self.menu.move_up() {
                    self.render()?;
                }
            }
            Command::MoveDown => {
                if self.menu.move_down() {
                    self.render()?;
                }
            }
            Command::ToggleExpand => {
                if self.menu.toggle_selected() {
                    self.render()?;
                }
            }
            Command::Execute => self.execute_selected()?,
            Command::Quit => self.state = SessionState::Stopped,
        }
        Ok(())
    }

    /// Draw a frame; the pending status message is shown once and dropped
    pub fn render(&mut self) -> DuiResult<()> {
        let frame = render_frame(&self.menu, self.status.as_ref(), &self.options);
        self.status = None;
        draw_frame(&mut self.terminal, &frame)?;
        Ok(())
    }

    fn execute_selected(&mut self) -> DuiResult<()> {
        let Some(script) = self
            .menu
            .selected_node()
            .and_then(TreeNode::script_path)
            .map(Path::to_path_buf)
        else {
            return Ok(());
        };

        self.state = SessionState::AwaitingExternal;
        if let Err(err) = self.leave_raw_mode() {
            warn!(%err, "could not leave raw mode before running script");
        }

        let outcome = self.hand_over(&script);

        if let Err(err) = self.enter_raw_mode() {
            self.state = SessionState::Stopped;
            return Err(err);
        }

        self.status = Some(match outcome? {
            Ok(()) => ColoredText::success(format!("Successfully executed: {}", script.display())),
            Err(err) => ColoredText::error(format!("Error executing script: {err}")),
        });
        self.state = SessionState::Running;
        self.render()
    }

    /// Run `script` with the terminal in cooked mode and wait for a key.
    ///
    /// The outer result carries terminal write failures, the inner one the
    /// script outcome.
    fn hand_over(&mut self, script: &Path) -> DuiResult<Result<(), ScriptError>> {
        let color = self.options.caps.supports_color;
        clear_screen(&mut self.terminal)?;
        writeln!(
            self.terminal,
            "{}\n",
            ColoredText::info(format!("Executing script: {}", script.display())).render(color)
        )?;
        self.terminal.flush()?;

        let outcome = self.runner.run(script);

        writeln!(
            self.terminal,
            "\n{}",
            ColoredText::info("Script execution completed. Press Enter to return to the menu...")
                .render(color)
        )?;
        self.terminal.flush()?;
        self.wait_for_key();
        Ok(outcome)
    }

    fn wait_for_key(&mut self) {
        let mut byte = [0u8; 1];
        if let Err(err) = self.terminal.read(&mut byte) {
            debug!(%err, "continue prompt read failed");
        }
    }

    fn enter_raw_mode(&mut self) -> DuiResult<()> {
        self.terminal
            .enter_raw_mode()
            .map_err(DuiError::terminal_mode)?;
        self.raw_mode = true;
        Ok(())
    }

    fn leave_raw_mode(&mut self) -> DuiResult<()> {
        if !self.raw_mode {
            return Ok(());
        }
        self.raw_mode = false;
        self.terminal
            .restore_mode()
            .map_err(DuiError::terminal_mode)
    }

    /// Best-effort return to the saved terminal mode
    fn restore_terminal(&mut self) {
        if let Err(err) = self.leave_raw_mode() {
            warn!(%err, "could not restore terminal mode");
        }
        self.state = SessionState::Stopped;
    }
}

impl<T: Terminal, R: ScriptRunner> Drop for Session<T, R> {
    fn drop(&mut self) {
        if self.raw_mode {
            let _ = self.terminal.restore_mode();
        }
    }
}
