//! Human-readable console summary of a run.

use super::writer::truncate_chars;
use crate::config::ReportConfig;
use crate::pipeline::Outcome;
use std::fmt;

/// Characters of a Base64 match shown before eliding.
const BASE64_PREVIEW: usize = 50;

/// Renders an [`Outcome`] for the terminal.
///
/// Not a stable machine-readable format.
pub struct ConsoleReport<'a> {
    outcome: &'a Outcome,
    config: &'a ReportConfig,
}

impl<'a> ConsoleReport<'a> {
    /// Wraps an outcome for display.
    pub fn new(outcome: &'a Outcome, config: &'a ReportConfig) -> Self {
        Self { outcome, config }
    }
}

impl fmt::Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.outcome;
        let text = &o.assembled.text;

        writeln!(f, "Image: {}", o.image_path.display())?;
        writeln!(f, "Size: {}x{}", o.width, o.height)?;
        writeln!(f, "Mode: {}", o.mode)?;
        writeln!(f, "Extracting {} LSB(s) from {} channel(s)", o.depth, o.channel)?;
        writeln!(f, "{}", "-".repeat(50))?;
        writeln!(
            f,
            "Bits: {}  Bytes: {}  Bit bias: {:+.4}",
            o.bit_count,
            o.assembled.raw.len(),
            o.bit_bias
        )?;

        writeln!(f, "\n=== Extracted Text Preview ===")?;
        writeln!(f, "{}", truncate_chars(text, self.config.preview_chars))?;
        if o.assembled.char_count() > self.config.preview_chars {
            writeln!(f, "\n... ({} total characters)", o.assembled.char_count())?;
        }

        writeln!(f, "\n=== Pattern Detection ===")?;
        if let Some(base64) = &o.patterns.base64 {
            writeln!(
                f,
                "Possible Base64 found: {}...",
                truncate_chars(base64, BASE64_PREVIEW)
            )?;
        }
        if let Some(url) = &o.patterns.url {
            writeln!(f, "URL found: {url}")?;
        }
        if !o.patterns.words.is_empty() {
            let shown: Vec<&str> = o
                .patterns
                .words
                .iter()
                .take(self.config.max_words)
                .map(String::as_str)
                .collect();
            writeln!(f, "Readable words: {}", shown.join(", "))?;
        }

        writeln!(f, "Text saved to: {}", o.files.text.display())?;
        writeln!(f, "Raw bytes saved to: {}", o.files.raw.display())?;
        write!(f, "\n=== Analysis Complete ===")
    }
}
