//! Pixel source abstraction and image file loading.
//!
//! Extraction is written against the [`PixelSource`] trait so that
//! decoded files and synthetic in-memory rasters are interchangeable.

use super::frame::Raster;
use super::indexed;
use super::pixel::{ColorMode, Pixel};
use image::ImageFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading an image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The input path does not exist.
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    /// The file could not be opened or decoded.
    #[error("failed to open image {path}: {source}")]
    Decode {
        /// Input file.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: image::ImageError,
    },
    /// The palette index plane of an indexed file could not be read.
    #[error("failed to read palette indices from {path}: {reason}")]
    Palette {
        /// Input file.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },
    /// A sample buffer does not match its dimensions.
    #[error("pixel buffer holds {actual} samples, expected {expected}")]
    BufferSize {
        /// Samples required by width, height and mode.
        expected: usize,
        /// Samples supplied.
        actual: usize,
    },
}

/// Read-only pixel access by coordinate.
pub trait PixelSource {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Sample layout shared by every pixel.
    fn color_mode(&self) -> ColorMode;

    /// Returns the pixel at `(x, y)`.
    ///
    /// Callers must stay within `width` x `height`.
    fn pixel(&self, x: u32, y: u32) -> Pixel;
}

/// Opens and decodes an image file into an 8-bit [`Raster`].
///
/// The format is sniffed from the file content, not its extension.
/// Indexed PNG and GIF files load as grayscale rasters of palette
/// indices. Higher bit depths are down-converted.
pub fn load(path: impl AsRef<Path>) -> Result<Raster, ImageError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ImageError::NotFound(path.to_path_buf()));
    }
    let decode_error = |source| ImageError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = image::io::Reader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?;

    let palette = match reader.format() {
        Some(ImageFormat::Png) => indexed::read_png(path)?,
        Some(ImageFormat::Gif) => indexed::read_gif(path)?,
        _ => None,
    };
    if let Some(raster) = palette {
        return Ok(raster);
    }

    let decoded = reader.decode().map_err(decode_error)?;

    let (width, height, mode, samples) = match decoded.color().channel_count() {
        1 => {
            let buf = decoded.to_luma8();
            let (w, h) = buf.dimensions();
            (w, h, ColorMode::Grayscale, buf.into_raw())
        }
        2 => {
            let buf = decoded.to_luma_alpha8();
            let (w, h) = buf.dimensions();
            (w, h, ColorMode::GrayscaleAlpha, buf.into_raw())
        }
        3 => {
            let buf = decoded.to_rgb8();
            let (w, h) = buf.dimensions();
            (w, h, ColorMode::Rgb, buf.into_raw())
        }
        _ => {
            let buf = decoded.to_rgba8();
            let (w, h) = buf.dimensions();
            (w, h, ColorMode::Rgba, buf.into_raw())
        }
    };

    tracing::debug!(
        path = %path.display(),
        width,
        height,
        mode = %mode,
        "Decoded image"
    );

    Raster::from_samples(width, height, mode, samples)
}
