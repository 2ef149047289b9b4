//! Common test utilities for dui scenario tests.
//!
//! - `ScriptedTerminal`: in-memory terminal fed with a fixed key sequence
//! - Fixtures: menu descriptions used across scenarios

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use dui::Terminal;

/// Terminal that replays `input` and records everything drawn
#[derive(Default)]
pub struct ScriptedTerminal {
    input: VecDeque<u8>,
    output: Vec<u8>,
    pub raw: bool,
    pub raw_entries: usize,
    pub restores: usize,
    pub size: (u16, u16),
}

impl ScriptedTerminal {
    pub fn new(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            size: (40, 16),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, columns: u16, rows: u16) -> Self {
        self.size = (columns, rows);
        self
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Bytes not consumed by the session
    pub fn pending(&self) -> usize {
        self.input.len()
    }
}

impl Read for ScriptedTerminal {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.input.len());
        for (slot, byte) in buf.iter_mut().zip(self.input.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

impl Write for ScriptedTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Terminal for ScriptedTerminal {
    fn enter_raw_mode(&mut self) -> io::Result<()> {
        self.raw = true;
        self.raw_entries += 1;
        Ok(())
    }

    fn restore_mode(&mut self) -> io::Result<()> {
        self.raw = false;
        self.restores += 1;
        Ok(())
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        Ok(self.size)
    }
}

/// Key bytes
pub const ARROW_DOWN: &[u8] = &[27, 91, 66];
pub const ARROW_UP: &[u8] = &[27, 91, 65];

/// A small operations menu with one script under `deploy`
pub const OPS_MENU: &str = r#"{
  "name": "ops",
  "type": "node",
  "children": [
    {
      "name": "deploy",
      "type": "node",
      "children": [
        { "name": "staging", "type": "executable", "path": "/bin/false" }
      ]
    },
    { "name": "notes", "type": "node", "children": [] }
  ]
}"#;
