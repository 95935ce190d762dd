//! Run configuration.
//!
//! Everything has a default matching the command-line tool's behavior;
//! a TOML file can override any section and command-line arguments
//! override the file.

use crate::assembly::DEFAULT_TERMINATION_THRESHOLD;
use crate::extraction::{BitDepth, ChannelSelector, ParameterError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Invalid extraction parameter.
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    /// A size limit is zero.
    #[error("{0} must be greater than zero")]
    ZeroLimit(&'static str),
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The file is not valid TOML for this format.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// `[extraction]` section.
    #[serde(default)]
    pub extraction: ExtractionConfig,
    /// `[assembly]` section.
    #[serde(default)]
    pub assembly: AssemblyConfig,
    /// `[output]` section.
    #[serde(default)]
    pub output: OutputConfig,
    /// `[report]` section.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Extraction parameters as written in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Low-order bits per sample (1-8).
    pub bit_depth: u32,
    /// Channel token: r, g, b, a, or all.
    pub channel: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            bit_depth: 1,
            channel: ChannelSelector::All.token().to_string(),
        }
    }
}

impl ExtractionConfig {
    /// Validated bit depth.
    pub fn depth(&self) -> Result<BitDepth, ParameterError> {
        BitDepth::new(self.bit_depth)
    }

    /// Validated channel selector.
    pub fn selector(&self) -> Result<ChannelSelector, ParameterError> {
        self.channel.parse()
    }
}

/// Byte assembly settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// A zero byte ends the message once the text exceeds this many characters.
    pub termination_threshold: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            termination_threshold: DEFAULT_TERMINATION_THRESHOLD,
        }
    }
}

/// Result file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the result files.
    pub directory: PathBuf,
    /// Maximum characters written to the text file.
    pub text_limit: usize,
    /// Maximum bytes written to the binary file.
    pub raw_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            text_limit: 10_000,
            raw_limit: 10_000,
        }
    }
}

impl OutputConfig {
    /// Default limits writing into `directory`.
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }
}

/// Console report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Characters of text shown in the preview.
    pub preview_chars: usize,
    /// Word matches listed.
    pub max_words: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview_chars: 500,
            max_words: 10,
        }
    }
}

/// `<home>/Downloads/ARG_Investigation/extracted`, relative if no home is known.
pub fn default_output_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join("Downloads")
        .join("ARG_Investigation")
        .join("extracted")
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extraction.depth()?;
        self.extraction.selector()?;
        if self.output.text_limit == 0 {
            return Err(ConfigError::ZeroLimit("output.text_limit"));
        }
        if self.output.raw_limit == 0 {
            return Err(ConfigError::ZeroLimit("output.raw_limit"));
        }
        Ok(())
    }
}
