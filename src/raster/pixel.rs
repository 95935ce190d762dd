//! Pixel and color mode types.

use std::fmt;

/// Layout of the samples making up each pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Single intensity value.
    Grayscale,
    /// Intensity followed by alpha.
    GrayscaleAlpha,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl ColorMode {
    /// Number of 8-bit samples per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            ColorMode::Grayscale => 1,
            ColorMode::GrayscaleAlpha => 2,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Grayscale => "L",
            ColorMode::GrayscaleAlpha => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
        };
        f.write_str(name)
    }
}

/// Channel values of a multi-channel pixel, by tuple slot.
///
/// Slots are positional: a two-channel (luma + alpha) pixel fills `r`
/// and `g` only. Missing slots are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelValues {
    /// First slot (red, or luma).
    pub r: Option<u8>,
    /// Second slot (green, or alpha of a luma pixel).
    pub g: Option<u8>,
    /// Third slot (blue).
    pub b: Option<u8>,
    /// Fourth slot (alpha).
    pub a: Option<u8>,
}

impl ChannelValues {
    /// Builds channel values from a 1 to 4 element sample slice.
    ///
    /// Samples beyond the fourth are ignored.
    pub fn from_slice(samples: &[u8]) -> Self {
        Self {
            r: samples.first().copied(),
            g: samples.get(1).copied(),
            b: samples.get(2).copied(),
            a: samples.get(3).copied(),
        }
    }

    /// Slots in fixed R, G, B, A order.
    #[inline]
    pub fn slots(&self) -> [Option<u8>; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    /// Scalar intensity.
    Grayscale(u8),
    /// Tuple of channel values.
    Multi(ChannelValues),
}
