//! Byte-to-character classification.

/// Placeholder for non-printable, non-zero bytes.
pub const PLACEHOLDER: char = '.';

/// How a single byte is rendered into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    /// Shown as the character with the byte's code point.
    Printable(char),
    /// Zero byte, a possible end-of-message marker.
    Null,
    /// Anything else, shown as [`PLACEHOLDER`].
    Binary,
}

/// Classifies a byte read as the code point U+0000..=U+00FF.
///
/// Printable means visible Latin-1: ASCII 0x20-0x7E and 0xA1-0xFF minus
/// the soft hyphen (0xAD). Newline, carriage return and tab also count.
pub fn classify(byte: u8) -> ByteClass {
    match byte {
        0x00 => ByteClass::Null,
        b'\n' | b'\r' | b'\t' | 0x20..=0x7E | 0xA1..=0xAC | 0xAE..=0xFF => {
            ByteClass::Printable(char::from(byte))
        }
        _ => ByteClass::Binary,
    }
}
