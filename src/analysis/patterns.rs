//! Regex-based scanning of reconstructed text.

use regex::Regex;
use std::sync::OnceLock;

const BASE64_PATTERN: &str = r"[A-Za-z0-9+/]{20,}={0,2}";
const URL_PATTERN: &str = r"https?://\S+";
const WORD_PATTERN: &str = r"[A-Za-z]{4,}";

/// Findings of a pattern scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternReport {
    /// First Base64-like run.
    pub base64: Option<String>,
    /// First URL.
    pub url: Option<String>,
    /// Every alphabetic run of four or more letters, in order.
    pub words: Vec<String>,
}

impl PatternReport {
    /// Returns true if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.base64.is_none() && self.url.is_none() && self.words.is_empty()
    }
}

/// Compiled pattern set.
pub struct PatternScanner {
    base64: &'static Regex,
    url: &'static Regex,
    words: &'static Regex,
}

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern compiles"))
}

impl PatternScanner {
    /// Creates a scanner over the shared compiled patterns.
    pub fn new() -> Self {
        static BASE64: OnceLock<Regex> = OnceLock::new();
        static URL: OnceLock<Regex> = OnceLock::new();
        static WORDS: OnceLock<Regex> = OnceLock::new();

        Self {
            base64: compiled(&BASE64, BASE64_PATTERN),
            url: compiled(&URL, URL_PATTERN),
            words: compiled(&WORDS, WORD_PATTERN),
        }
    }

    /// Scans `text` for Base64 runs, URLs and word-like tokens.
    pub fn scan(&self, text: &str) -> PatternReport {
        let report = PatternReport {
            base64: self.base64.find(text).map(|m| m.as_str().to_string()),
            url: self.url.find(text).map(|m| m.as_str().to_string()),
            words: self
                .words
                .find_iter(text)
                .map(|m| m.as_str().to_string())
                .collect(),
        };

        tracing::debug!(
            base64 = report.base64.is_some(),
            url = report.url.is_some(),
            words = report.words.len(),
            "Pattern scan complete"
        );

        report
    }
}

impl Default for PatternScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_stops_at_whitespace() {
        let report = PatternScanner::new().scan("visit https://example.com/x now");
        assert_eq!(report.url.as_deref(), Some("https://example.com/x"));
    }

    #[test]
    fn test_first_url_only() {
        let report = PatternScanner::new().scan("http://a.io then https://b.io");
        assert_eq!(report.url.as_deref(), Some("http://a.io"));
    }

    #[test]
    fn test_base64_with_padding() {
        let report = PatternScanner::new().scan("..aGVsbG8gd29ybGQgaGVsbG8gd29y==..");
        assert_eq!(report.base64.as_deref(), Some("aGVsbG8gd29ybGQgaGVsbG8gd29y=="));
    }

    #[test]
    fn test_short_base64_ignored() {
        let report = PatternScanner::new().scan("abc+/123");
        assert!(report.base64.is_none());
    }

    #[test]
    fn test_words_in_order() {
        let report = PatternScanner::new().scan("the Quick.brown fox_JUMPS 1234 over");
        assert_eq!(report.words, vec!["Quick", "brown", "JUMPS", "over"]);
    }

    #[test]
    fn test_no_words() {
        let report = PatternScanner::new().scan("ab.c1d2 xyz 42");
        assert!(report.words.is_empty());
        assert!(report.is_empty());
    }

    #[test]
    fn test_all_words_returned() {
        let text = vec!["word"; 15].join(" ");
        let report = PatternScanner::new().scan(&text);
        assert_eq!(report.words.len(), 15);
    }

    #[test]
    fn test_latin1_letters_not_words() {
        let report = PatternScanner::new().scan("éééé");
        assert!(report.words.is_empty());
    }
}
