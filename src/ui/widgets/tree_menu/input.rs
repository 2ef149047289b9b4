//! Raw keyboard input decoding.
//!
//! Bytes arrive unbuffered from a terminal in raw mode. Most commands are a
//! single byte; cursor keys arrive as `ESC [ A..D`.

use std::io::{self, Read};

/// Logical command decoded from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    ToggleExpand,
    Execute,
    Quit,
}

/// End-of-text, sent by Ctrl+C in raw mode
pub const CTRL_C: u8 = 3;
pub const CARRIAGE_RETURN: u8 = 13;
pub const ESCAPE: u8 = 27;
const BRACKET: u8 = b'[';

/// What a single byte means on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Command(Command),
    /// Start of an escape sequence; two more bytes are expected
    Escape,
    Ignored,
}

/// Map a single byte read in the idle state
pub fn decode_byte(byte: u8) -> Decoded {
    match byte {
        CTRL_C => Decoded::Command(Command::Quit),
        CARRIAGE_RETURN | b' ' => Decoded::Command(Command::ToggleExpand),
        ESCAPE => Decoded::Escape,
        _ => match byte.to_ascii_lowercase() {
            b'q' => Decoded::Command(Command::Quit),
            b'w' => Decoded::Command(Command::MoveUp),
            b's' => Decoded::Command(Command::MoveDown),
            b'e' => Decoded::Command(Command::ToggleExpand),
            b'x' => Decoded::Command(Command::Execute),
            _ => Decoded::Ignored,
        },
    }
}

/// Map the bytes that followed an escape byte.
///
/// Anything shorter than two bytes, or not an arrow key, is discarded.
pub fn decode_escape(tail: &[u8]) -> Option<Command> {
    match tail {
        [BRACKET, b'A', ..] => Some(Command::MoveUp),
        [BRACKET, b'B', ..] => Some(Command::MoveDown),
        [BRACKET, b'C' | b'D', ..] => Some(Command::ToggleExpand),
        _ => None,
    }
}

/// Read one key press from `reader` and decode it.
///
/// `Ok(None)` means the bytes read did not form a command. An escape byte
/// triggers a single best-effort read of up to two more bytes.
pub fn read_command(reader: &mut impl Read) -> io::Result<Option<Command>> {
    let mut byte = [0u8; 1];
    if reader.read(&mut byte)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }

    match decode_byte(byte[0]) {
        Decoded::Command(command) => Ok(Some(command)),
        Decoded::Ignored => Ok(None),
        Decoded::Escape => {
            let mut tail = [0u8; 2];
            let n = match reader.read(&mut tail) {
                Ok(n) => n,
                Err(err) => {
                    tracing::trace!(%err, "escape sequence read failed");
                    0
                }
            };
            Ok(decode_escape(&tail[..n]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(bytes: &[u8]) -> Vec<Option<Command>> {
        let mut reader = bytes;
        let mut out = Vec::new();
        while !reader.is_empty() {
            out.push(read_command(&mut reader).unwrap());
        }
        out
    }

    #[test]
    fn quit_keys() {
        assert_eq!(decode_byte(3), Decoded::Command(Command::Quit));
        assert_eq!(decode_byte(b'q'), Decoded::Command(Command::Quit));
        assert_eq!(decode_byte(b'Q'), Decoded::Command(Command::Quit));
    }

    #[test]
    fn letter_commands_ignore_case() {
        for (lower, command) in [
            (b'w', Command::MoveUp),
            (b's', Command::MoveDown),
            (b'e', Command::ToggleExpand),
            (b'x', Command::Execute),
        ] {
            assert_eq!(decode_byte(lower), Decoded::Command(command));
            assert_eq!(
                decode_byte(lower.to_ascii_uppercase()),
                Decoded::Command(command)
            );
        }
    }

    #[test]
    fn toggle_keys() {
        assert_eq!(decode_byte(13), Decoded::Command(Command::ToggleExpand));
        assert_eq!(decode_byte(b' '), Decoded::Command(Command::ToggleExpand));
    }

    #[test]
    fn unknown_bytes_are_ignored() {
        for byte in [b'z', b'1', 10, 0, 127, 200] {
            assert_eq!(decode_byte(byte), Decoded::Ignored, "byte {byte}");
        }
    }

    #[test]
    fn escape_starts_sequence() {
        assert_eq!(decode_byte(27), Decoded::Escape);
    }

    #[test]
    fn arrow_sequences() {
        assert_eq!(decode_escape(&[91, 65]), Some(Command::MoveUp));
        assert_eq!(decode_escape(&[91, 66]), Some(Command::MoveDown));
        assert_eq!(decode_escape(&[91, 67]), Some(Command::ToggleExpand));
        assert_eq!(decode_escape(&[91, 68]), Some(Command::ToggleExpand));
    }

    #[test]
    fn short_or_unknown_sequences_are_discarded() {
        assert_eq!(decode_escape(&[]), None);
        assert_eq!(decode_escape(&[91]), None);
        assert_eq!(decode_escape(&[79, 65]), None);
        assert_eq!(decode_escape(&[91, 72]), None);
    }

    #[test]
    fn read_command_decodes_down_arrow() {
        assert_eq!(decode_all(&[27, 91, 66]), vec![Some(Command::MoveDown)]);
    }

    #[test]
    fn read_command_stream() {
        assert_eq!(
            decode_all(&[b'w', b'z', 27, 91, 65, b'X', 3]),
            vec![
                Some(Command::MoveUp),
                None,
                Some(Command::MoveUp),
                Some(Command::Execute),
                Some(Command::Quit),
            ]
        );
    }

    #[test]
    fn lone_escape_is_dropped() {
        assert_eq!(decode_all(&[27]), vec![None]);
        assert_eq!(decode_all(&[27, 91]), vec![None]);
    }

    #[test]
    fn closed_stream_is_an_error() {
        let mut empty: &[u8] = &[];
        let err = read_command(&mut empty).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
