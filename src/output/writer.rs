//! Persistence of extraction results.

use crate::assembly::Assembled;
use crate::config::OutputConfig;
use crate::extraction::{BitDepth, ChannelSelector};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing results.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        /// Directory being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A result file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Paths of the files written for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    /// UTF-8 text reconstruction (`.txt`).
    pub text: PathBuf,
    /// Raw byte reconstruction (`.bin`).
    pub raw: PathBuf,
}

/// Writes the text and raw byte reconstructions to disk.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    config: OutputConfig,
}

impl ResultWriter {
    /// Creates a writer for the given output settings.
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Output directory.
    pub fn directory(&self) -> &Path {
        &self.config.directory
    }

    /// Result paths for an input stem and parameter set.
    pub fn paths(&self, stem: &str, depth: BitDepth, channel: ChannelSelector) -> WrittenFiles {
        let base = format!("{stem}-lsb-{channel}-{depth}bit");
        WrittenFiles {
            text: self.config.directory.join(format!("{base}.txt")),
            raw: self.config.directory.join(format!("{base}.bin")),
        }
    }

    /// Writes both files, overwriting previous results.
    ///
    /// Text is cut to `text_limit` characters and raw bytes to `raw_limit`.
    pub fn write(
        &self,
        stem: &str,
        depth: BitDepth,
        channel: ChannelSelector,
        assembled: &Assembled,
    ) -> Result<WrittenFiles, WriteError> {
        let dir = &self.config.directory;
        std::fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let files = self.paths(stem, depth, channel);

        let text = truncate_chars(&assembled.text, self.config.text_limit);
        std::fs::write(&files.text, text).map_err(|source| WriteError::Write {
            path: files.text.clone(),
            source,
        })?;
        tracing::info!(path = %files.text.display(), chars = text.chars().count(), "Wrote text");

        let raw = &assembled.raw[..assembled.raw.len().min(self.config.raw_limit)];
        std::fs::write(&files.raw, raw).map_err(|source| WriteError::Write {
            path: files.raw.clone(),
            source,
        })?;
        tracing::info!(path = %files.raw.display(), bytes = raw.len(), "Wrote raw bytes");

        Ok(files)
    }
}

/// Base name of the input file without its extension.
pub fn input_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

/// Returns the first `limit` characters of `text`.
pub(crate) fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::Assembler;

    fn depth(bits: u32) -> BitDepth {
        BitDepth::new(bits).unwrap()
    }

    #[test]
    fn test_file_names() {
        let writer = ResultWriter::new(OutputConfig::in_directory("/out"));
        let files = writer.paths("cover", depth(2), ChannelSelector::R);

        assert_eq!(files.text, PathBuf::from("/out/cover-lsb-r-2bit.txt"));
        assert_eq!(files.raw, PathBuf::from("/out/cover-lsb-r-2bit.bin"));
    }

    #[test]
    fn test_input_stem() {
        assert_eq!(input_stem(Path::new("/a/b/photo.final.png")), "photo.final");
        assert_eq!(input_stem(Path::new("noext")), "noext");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_write_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("deep").join("er");
        let writer = ResultWriter::new(OutputConfig::in_directory(&out));
        let assembled = Assembler::new().assemble_bytes(b"hello\x01world");

        let files = writer
            .write("img", depth(1), ChannelSelector::All, &assembled)
            .unwrap();

        assert_eq!(std::fs::read_to_string(&files.text).unwrap(), "hello.world");
        assert_eq!(std::fs::read(&files.raw).unwrap(), b"hello\x01world");
    }

    #[test]
    fn test_write_truncates_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig {
            directory: dir.path().to_path_buf(),
            text_limit: 10_000,
            raw_limit: 10_000,
        };
        let writer = ResultWriter::new(config);

        let long = Assembler::new().assemble_bytes(&vec![b'k'; 12_345]);
        let files = writer
            .write("img", depth(8), ChannelSelector::G, &long)
            .unwrap();
        assert_eq!(std::fs::read_to_string(&files.text).unwrap().chars().count(), 10_000);
        assert_eq!(std::fs::read(&files.raw).unwrap().len(), 10_000);

        let short = Assembler::new().assemble_bytes(b"tiny");
        writer
            .write("img", depth(8), ChannelSelector::G, &short)
            .unwrap();
        assert_eq!(std::fs::read_to_string(&files.text).unwrap(), "tiny");
    }

    #[test]
    fn test_high_bytes_written_as_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ResultWriter::new(OutputConfig::in_directory(dir.path()));
        let assembled = Assembler::new().assemble_bytes(&[0xE9]);

        let files = writer
            .write("img", depth(1), ChannelSelector::All, &assembled)
            .unwrap();

        assert_eq!(std::fs::read(&files.text).unwrap(), "é".as_bytes());
        assert_eq!(std::fs::read(&files.raw).unwrap(), vec![0xE9]);
    }
}
