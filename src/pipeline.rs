//! End-to-end extraction run.

use crate::analysis::{PatternReport, PatternScanner};
use crate::assembly::{Assembled, Assembler};
use crate::config::{ConfigError, FileConfig, OutputConfig};
use crate::extraction::{BitDepth, ChannelSelector, Extractor, ParameterError};
use crate::output::{input_stem, ResultWriter, WriteError, WrittenFiles};
use crate::raster::{self, ColorMode, ImageError, PixelSource};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Any error that aborts a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Invalid bit depth or channel.
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Input image missing or unreadable.
    #[error(transparent)]
    Image(#[from] ImageError),
    /// Result files could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Everything produced by one run.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Input image.
    pub image_path: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Color mode the image was read in.
    pub mode: ColorMode,
    /// Bits taken per sample.
    pub depth: BitDepth,
    /// Sampled channels.
    pub channel: ChannelSelector,
    /// Length of the extracted bit stream.
    pub bit_count: usize,
    /// Bit bias of the extracted stream.
    pub bit_bias: f64,
    /// Reconstructed text and raw bytes.
    pub assembled: Assembled,
    /// Pattern findings in the text.
    pub patterns: PatternReport,
    /// Result files written.
    pub files: WrittenFiles,
}

/// Extraction stages wired together.
#[derive(Debug, Clone)]
pub struct Pipeline {
    extractor: Extractor,
    assembler: Assembler,
    writer: ResultWriter,
}

impl Pipeline {
    /// Wires the given stages together.
    pub fn new(extractor: Extractor, assembler: Assembler, output: OutputConfig) -> Self {
        Self {
            extractor,
            assembler,
            writer: ResultWriter::new(output),
        }
    }

    /// Builds a pipeline from a validated configuration.
    pub fn from_config(config: &FileConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        let extractor = Extractor::new(config.extraction.depth()?, config.extraction.selector()?);
        let assembler = Assembler::with_threshold(config.assembly.termination_threshold);
        Ok(Self::new(extractor, assembler, config.output.clone()))
    }

    /// Returns the extractor.
    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Loads `image_path`, extracts, assembles, scans and writes results.
    ///
    /// Nothing is written if the image cannot be read.
    pub fn run(&self, image_path: impl AsRef<Path>) -> Result<Outcome, PipelineError> {
        let image_path = image_path.as_ref();
        let raster = raster::load(image_path)?;

        let bits = self.extractor.extract(&raster);
        let assembled = self.assembler.assemble(&bits);
        if let Some(index) = assembled.terminated_at {
            tracing::debug!(byte = index, "Zero byte ended the message");
        }
        let patterns = PatternScanner::new().scan(&assembled.text);

        let files = self.writer.write(
            &input_stem(image_path),
            self.extractor.depth(),
            self.extractor.channel(),
            &assembled,
        )?;

        Ok(Outcome {
            image_path: image_path.to_path_buf(),
            width: raster.width(),
            height: raster.height(),
            mode: raster.color_mode(),
            depth: self.extractor.depth(),
            channel: self.extractor.channel(),
            bit_count: bits.len(),
            bit_bias: bits.bit_bias(),
            assembled,
            patterns,
            files,
        })
    }
}
