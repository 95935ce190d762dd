//! Raster type holding decoded 8-bit pixel data.

use super::pixel::{ChannelValues, ColorMode, Pixel};
use super::source::{ImageError, PixelSource};

/// A decoded image with interleaved 8-bit samples.
///
/// Samples are stored row-major, `color_mode.channels()` per pixel.
#[derive(Clone)]
pub struct Raster {
    /// Interleaved sample data.
    samples: Vec<u8>,
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
    /// Per-pixel sample layout.
    mode: ColorMode,
}

impl Raster {
    /// Creates a raster from interleaved samples.
    ///
    /// Fails if the buffer length does not match the dimensions and mode.
    pub fn from_samples(
        width: u32,
        height: u32,
        mode: ColorMode,
        samples: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let expected = (width as usize) * (height as usize) * mode.channels();
        if samples.len() != expected {
            return Err(ImageError::BufferSize {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            samples,
            width,
            height,
            mode,
        })
    }

    /// Returns the raw interleaved samples.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Returns the total number of pixels (width * height).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl PixelSource for Raster {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn color_mode(&self) -> ColorMode {
        self.mode
    }

    fn pixel(&self, x: u32, y: u32) -> Pixel {
        let channels = self.mode.channels();
        let start = ((y as usize) * (self.width as usize) + (x as usize)) * channels;
        let samples = &self.samples[start..start + channels];
        match self.mode {
            ColorMode::Grayscale => Pixel::Grayscale(samples[0]),
            _ => Pixel::Multi(ChannelValues::from_slice(samples)),
        }
    }
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("mode", &self.mode)
            .field("sample_bytes", &self.samples.len())
            .finish()
    }
}
