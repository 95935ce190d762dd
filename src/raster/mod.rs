//! Image input and pixel access.
//!
//! This module decodes image files into an owned 8-bit raster and
//! exposes per-pixel access in a form the extractor can pattern-match
//! on: scalar grayscale values or positional channel tuples.

mod frame;
mod indexed;
mod pixel;
mod source;

pub use frame::Raster;
pub use pixel::{ChannelValues, ColorMode, Pixel};
pub use source::{load, ImageError, PixelSource};
