//! Byte assembly and text reconstruction.
//!
//! Converts the extracted bit stream into a raw byte buffer and a
//! displayable text rendering, stopping early on a zero byte that
//! follows enough text to look like the end of a message.

mod assembler;
mod classify;

pub use assembler::{Assembled, Assembler, DEFAULT_TERMINATION_THRESHOLD};
pub use classify::{classify, ByteClass, PLACEHOLDER};
