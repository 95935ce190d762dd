//! Pattern detection on reconstructed text.
//!
//! Heuristic character-class searches only: a Base64-like match is not
//! a validated decode and a word match is not a dictionary lookup.

mod patterns;

pub use patterns::{PatternReport, PatternScanner};
