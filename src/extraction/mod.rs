//! Least-significant-bit harvesting.
//!
//! This module walks a pixel source in raster order and collects the
//! low-order bits of each selected channel into a single packed
//! [`BitStream`]. It is the only full pass over the pixel data.

mod bitstream;
mod channel;

pub use bitstream::BitStream;
pub use channel::{BitDepth, ChannelSelector, ParameterError};

use crate::raster::{ColorMode, Pixel, PixelSource};

/// Extracts low-order bits from every pixel of an image.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    depth: BitDepth,
    channel: ChannelSelector,
}

impl Extractor {
    /// Creates an extractor for the given parameters.
    pub fn new(depth: BitDepth, channel: ChannelSelector) -> Self {
        Self { depth, channel }
    }

    /// Returns the configured bit depth.
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Returns the configured channel selector.
    pub fn channel(&self) -> ChannelSelector {
        self.channel
    }

    /// Number of values sampled from each pixel of the given mode.
    pub fn samples_per_pixel(&self, mode: ColorMode) -> usize {
        match mode {
            ColorMode::Grayscale => 1,
            _ => (0..mode.channels())
                .filter(|&slot| self.channel.selects(slot))
                .count(),
        }
    }

    /// Length in bits of the stream [`extract`](Self::extract) will produce.
    ///
    /// Depends only on dimensions, color mode and parameters.
    pub fn expected_len<S: PixelSource + ?Sized>(&self, source: &S) -> usize {
        let pixels = (source.width() as usize) * (source.height() as usize);
        pixels * self.samples_per_pixel(source.color_mode()) * self.depth.get() as usize
    }

    /// Extracts the bit stream in row-major order.
    ///
    /// Multi-channel pixels contribute their selected slots in R, G, B, A
    /// order; slots the pixel does not have are skipped.
    pub fn extract<S: PixelSource + ?Sized>(&self, source: &S) -> BitStream {
        let mask = self.depth.mask();
        let width = self.depth.get();
        let mut bits = BitStream::with_capacity(self.expected_len(source));

        for y in 0..source.height() {
            for x in 0..source.width() {
                match source.pixel(x, y) {
                    Pixel::Grayscale(value) => bits.push_bits(value & mask, width),
                    Pixel::Multi(values) => {
                        for (slot, value) in values.slots().into_iter().enumerate() {
                            if !self.channel.selects(slot) {
                                continue;
                            }
                            if let Some(value) = value {
                                bits.push_bits(value & mask, width);
                            }
                        }
                    }
                }
            }
        }

        tracing::debug!(
            bits = bits.len(),
            depth = width,
            channel = %self.channel,
            "Extracted bit stream"
        );

        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Raster;
    use proptest::prelude::*;

    fn depth(bits: u32) -> BitDepth {
        BitDepth::new(bits).unwrap()
    }

    #[test]
    fn test_grayscale_ignores_selector() {
        let raster = Raster::from_samples(2, 1, ColorMode::Grayscale, vec![0b11, 0b10]).unwrap();
        let extractor = Extractor::new(depth(2), ChannelSelector::B);

        assert_eq!(extractor.extract(&raster).to_binary_string(), "1110");
    }

    #[test]
    fn test_all_channels_in_rgba_order() {
        let raster = Raster::from_samples(1, 1, ColorMode::Rgba, vec![1, 0, 1, 1]).unwrap();
        let extractor = Extractor::new(depth(1), ChannelSelector::All);

        assert_eq!(extractor.extract(&raster).to_binary_string(), "1011");
    }

    #[test]
    fn test_raster_order_rows_then_columns() {
        // 2x2 grayscale: (0,0)=1 (1,0)=0 (0,1)=0 (1,1)=1
        let raster = Raster::from_samples(2, 2, ColorMode::Grayscale, vec![1, 0, 0, 1]).unwrap();
        let extractor = Extractor::new(depth(1), ChannelSelector::All);

        assert_eq!(extractor.extract(&raster).to_binary_string(), "1001");
    }

    #[test]
    fn test_alpha_on_rgb_yields_nothing() {
        let raster = Raster::from_samples(2, 2, ColorMode::Rgb, vec![0xFF; 12]).unwrap();
        let extractor = Extractor::new(depth(4), ChannelSelector::A);

        assert!(extractor.extract(&raster).is_empty());
        assert_eq!(extractor.expected_len(&raster), 0);
    }

    #[test]
    fn test_luma_alpha_slots_are_positional() {
        let raster = Raster::from_samples(1, 1, ColorMode::GrayscaleAlpha, vec![0x01, 0x00]).unwrap();

        let r = Extractor::new(depth(1), ChannelSelector::R).extract(&raster);
        let g = Extractor::new(depth(1), ChannelSelector::G).extract(&raster);
        let b = Extractor::new(depth(1), ChannelSelector::B).extract(&raster);

        assert_eq!(r.to_binary_string(), "1");
        assert_eq!(g.to_binary_string(), "0");
        assert!(b.is_empty());
    }

    #[test]
    fn test_eight_bit_depth_reproduces_samples() {
        let raster = Raster::from_samples(2, 1, ColorMode::Rgb, b"Hi!abc".to_vec()).unwrap();
        let extractor = Extractor::new(depth(8), ChannelSelector::All);

        assert_eq!(extractor.extract(&raster).complete_bytes(), b"Hi!abc");
    }

    #[test]
    fn test_single_channel_on_rgba_counts_pixels() {
        let raster = Raster::from_samples(5, 3, ColorMode::Rgba, vec![0xA5; 60]).unwrap();
        let extractor = Extractor::new(depth(3), ChannelSelector::R);

        assert_eq!(extractor.extract(&raster).len(), 5 * 3 * 3);
    }

    fn mode_strategy() -> impl Strategy<Value = ColorMode> {
        prop_oneof![
            Just(ColorMode::Grayscale),
            Just(ColorMode::GrayscaleAlpha),
            Just(ColorMode::Rgb),
            Just(ColorMode::Rgba),
        ]
    }

    fn selector_strategy() -> impl Strategy<Value = ChannelSelector> {
        prop_oneof![
            Just(ChannelSelector::R),
            Just(ChannelSelector::G),
            Just(ChannelSelector::B),
            Just(ChannelSelector::A),
            Just(ChannelSelector::All),
        ]
    }

    proptest! {
        #[test]
        fn prop_length_depends_only_on_shape(
            width in 0u32..8,
            height in 0u32..8,
            mode in mode_strategy(),
            selector in selector_strategy(),
            bits in 1u32..=8,
            pool in prop::collection::vec(any::<u8>(), 256),
        ) {
            let n = (width * height) as usize * mode.channels();
            let raster = Raster::from_samples(width, height, mode, pool[..n].to_vec()).unwrap();
            let zeros = Raster::from_samples(width, height, mode, vec![0; n]).unwrap();
            let extractor = Extractor::new(depth(bits), selector);

            let stream = extractor.extract(&raster);
            prop_assert_eq!(stream.len(), extractor.expected_len(&raster));
            prop_assert_eq!(stream.len(), extractor.extract(&zeros).len());
        }

        #[test]
        fn prop_extraction_is_deterministic(
            pool in prop::collection::vec(any::<u8>(), 48),
            bits in 1u32..=8,
            selector in selector_strategy(),
        ) {
            let raster = Raster::from_samples(4, 3, ColorMode::Rgba, pool).unwrap();
            let extractor = Extractor::new(depth(bits), selector);

            prop_assert_eq!(extractor.extract(&raster), extractor.extract(&raster));
        }
    }
}
