//! Property tests for key decoding.

use std::io::Cursor;

use proptest::prelude::*;

use dui::ui::widgets::tree_menu::{decode_byte, decode_escape, read_command, Decoded};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Decoding arbitrary byte streams never panics and never
    /// consumes more than three bytes per key press.
    #[test]
    fn property_read_command_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut reader = Cursor::new(bytes.clone());
        let mut reads = 0;
        while (reader.position() as usize) < bytes.len() {
            let before = reader.position();
            let _ = read_command(&mut reader);
            let consumed = reader.position() - before;
            prop_assert!((1..=3).contains(&consumed));
            reads += 1;
        }
        prop_assert!(reads <= bytes.len());
    }

    /// PROPERTY: Letter commands ignore case.
    #[test]
    fn property_letters_case_insensitive(byte in any::<u8>().prop_filter("ascii letter", u8::is_ascii_alphabetic)) {
        prop_assert_eq!(decode_byte(byte.to_ascii_lowercase()), decode_byte(byte.to_ascii_uppercase()));
    }

    /// PROPERTY: Only cursor-key tails (`[A` to `[D`) decode to commands.
    #[test]
    fn property_escape_tails(tail in proptest::collection::vec(any::<u8>(), 0..=2)) {
        let decoded = decode_escape(&tail);
        let is_arrow = matches!(tail.as_slice(), [91, 65..=68]);
        prop_assert_eq!(decoded.is_some(), is_arrow);
    }
}

#[test]
fn escape_byte_starts_sequence() {
    assert_eq!(decode_byte(27), Decoded::Escape);
}
