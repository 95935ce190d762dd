//! Regrouping of the bit stream into bytes and text.

use super::classify::{classify, ByteClass, PLACEHOLDER};
use crate::extraction::BitStream;

/// Default number of text characters that must precede a zero byte
/// for it to end the message.
pub const DEFAULT_TERMINATION_THRESHOLD: usize = 10;

/// Text and raw bytes reconstructed from a bit stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembled {
    /// Displayable reconstruction.
    pub text: String,
    /// Bytes processed, including a terminating zero byte.
    pub raw: Vec<u8>,
    /// Index of the zero byte that ended processing, if any.
    pub terminated_at: Option<usize>,
    /// Number of characters in `text`.
    char_count: usize,
}

impl Assembled {
    /// Number of characters in the text (not UTF-8 bytes).
    #[inline]
    pub fn char_count(&self) -> usize {
        self.char_count
    }
}

/// Builds text and raw bytes from 8-bit groups of a bit stream.
#[derive(Debug, Clone, Copy)]
pub struct Assembler {
    termination_threshold: usize,
}

impl Assembler {
    /// Creates an assembler with the default termination threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_TERMINATION_THRESHOLD)
    }

    /// Creates an assembler that stops at a zero byte once the text
    /// holds more than `threshold` characters.
    pub fn with_threshold(threshold: usize) -> Self {
        Self {
            termination_threshold: threshold,
        }
    }

    /// Returns the termination threshold.
    pub fn threshold(&self) -> usize {
        self.termination_threshold
    }

    /// Assembles the complete bytes of `bits`.
    pub fn assemble(&self, bits: &BitStream) -> Assembled {
        self.assemble_bytes(bits.complete_bytes())
    }

    /// Assembles an already grouped byte sequence.
    ///
    /// Every byte is appended to `raw` before it is classified, so a
    /// terminating zero byte is the last raw byte.
    pub fn assemble_bytes(&self, bytes: &[u8]) -> Assembled {
        let mut out = Assembled {
            text: String::with_capacity(bytes.len()),
            raw: Vec::with_capacity(bytes.len()),
            ..Default::default()
        };

        for (index, &byte) in bytes.iter().enumerate() {
            out.raw.push(byte);

            match classify(byte) {
                ByteClass::Printable(c) => {
                    out.text.push(c);
                    out.char_count += 1;
                }
                ByteClass::Null => {
                    if out.char_count > self.termination_threshold {
                        out.terminated_at = Some(index);
                        break;
                    }
                }
                ByteClass::Binary => {
                    out.text.push(PLACEHOLDER);
                    out.char_count += 1;
                }
            }
        }

        tracing::debug!(
            bytes = out.raw.len(),
            chars = out.char_count,
            terminated_at = ?out.terminated_at,
            "Assembled byte sequence"
        );

        out
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminates_after_long_text() {
        let mut bytes = vec![0x41; 11];
        bytes.push(0x00);
        bytes.extend([0x42; 5]);

        let out = Assembler::new().assemble_bytes(&bytes);

        assert_eq!(out.text, "AAAAAAAAAAA");
        assert_eq!(out.raw.len(), 12);
        assert_eq!(out.raw.last(), Some(&0x00));
        assert_eq!(out.terminated_at, Some(11));
    }

    #[test]
    fn test_leading_zeros_skipped() {
        let mut bytes = vec![0x00; 3];
        bytes.extend([0x41; 5]);

        let out = Assembler::new().assemble_bytes(&bytes);

        assert_eq!(out.text, "AAAAA");
        assert_eq!(out.raw, bytes);
        assert_eq!(out.terminated_at, None);
    }

    #[test]
    fn test_exactly_threshold_does_not_terminate() {
        let mut bytes = vec![b'x'; 10];
        bytes.push(0x00);
        bytes.push(b'y');

        let out = Assembler::new().assemble_bytes(&bytes);

        assert_eq!(out.text, "xxxxxxxxxxy");
        assert_eq!(out.raw.len(), 12);
    }

    #[test]
    fn test_placeholders_count_toward_threshold() {
        let mut bytes = vec![0x01; 11];
        bytes.push(0x00);
        bytes.push(b'z');

        let out = Assembler::new().assemble_bytes(&bytes);

        assert_eq!(out.text, ".".repeat(11));
        assert_eq!(out.terminated_at, Some(11));
    }

    #[test]
    fn test_custom_threshold() {
        let out = Assembler::with_threshold(2).assemble_bytes(b"abc\0def");
        assert_eq!(out.text, "abc");
        assert_eq!(out.raw, b"abc\0");
    }

    #[test]
    fn test_high_bytes_counted_as_chars() {
        // Twelve two-byte UTF-8 characters, then a terminator
        let mut bytes = vec![0xE9; 12];
        bytes.push(0x00);
        bytes.push(b'q');

        let out = Assembler::with_threshold(11).assemble_bytes(&bytes);

        assert_eq!(out.char_count(), 12);
        assert_eq!(out.text.len(), 24);
        assert_eq!(out.terminated_at, Some(12));
    }

    #[test]
    fn test_empty_and_short_streams() {
        assert_eq!(Assembler::new().assemble(&BitStream::new()), Assembled::default());

        let mut bits = BitStream::new();
        bits.push_bits(0x41, 7);
        let out = Assembler::new().assemble(&bits);
        assert!(out.text.is_empty());
        assert!(out.raw.is_empty());
    }

    #[test]
    fn test_assembles_from_bit_stream() {
        let mut bits = BitStream::new();
        for byte in b"Hi\n" {
            bits.push_bits(*byte, 8);
        }
        bits.push_bits(0b1, 1);

        let out = Assembler::new().assemble(&bits);
        assert_eq!(out.text, "Hi\n");
        assert_eq!(out.raw, b"Hi\n");
    }
}
