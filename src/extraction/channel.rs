//! Extraction parameters: bit depth and channel selection.

use std::fmt;
use std::str::FromStr;

/// Invalid extraction parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    /// Bit depth outside 1..=8.
    #[error("bit depth {0} out of range (must be 1-8)")]
    BitDepth(u32),
    /// Unrecognised channel token.
    #[error("invalid channel {0:?} (must be r, g, b, a, or all)")]
    Channel(String),
}

/// Number of low-order bits taken from each sampled value.
///
/// Always within 1..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitDepth(u8);

impl BitDepth {
    /// One bit per sample.
    pub const ONE: BitDepth = BitDepth(1);

    /// Creates a bit depth, rejecting values outside 1..=8.
    pub fn new(bits: u32) -> Result<Self, ParameterError> {
        match bits {
            1..=8 => Ok(Self(bits as u8)),
            _ => Err(ParameterError::BitDepth(bits)),
        }
    }

    /// Number of bits.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Mask selecting the low-order bits.
    #[inline]
    pub fn mask(self) -> u8 {
        ((1u16 << self.0) - 1) as u8
    }
}

impl Default for BitDepth {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which channels are sampled from multi-channel pixels.
///
/// Ignored for grayscale images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChannelSelector {
    /// Red (first slot).
    R,
    /// Green (second slot).
    G,
    /// Blue (third slot).
    B,
    /// Alpha (fourth slot).
    A,
    /// Every slot the pixel has.
    #[default]
    All,
}

impl ChannelSelector {
    /// Whether the tuple slot at `index` (R=0 .. A=3) is sampled.
    #[inline]
    pub fn selects(self, index: usize) -> bool {
        match self {
            ChannelSelector::All => true,
            ChannelSelector::R => index == 0,
            ChannelSelector::G => index == 1,
            ChannelSelector::B => index == 2,
            ChannelSelector::A => index == 3,
        }
    }

    /// Lowercase token used on the command line and in file names.
    pub fn token(self) -> &'static str {
        match self {
            ChannelSelector::R => "r",
            ChannelSelector::G => "g",
            ChannelSelector::B => "b",
            ChannelSelector::A => "a",
            ChannelSelector::All => "all",
        }
    }
}

impl FromStr for ChannelSelector {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" => Ok(ChannelSelector::R),
            "g" => Ok(ChannelSelector::G),
            "b" => Ok(ChannelSelector::B),
            "a" => Ok(ChannelSelector::A),
            "all" => Ok(ChannelSelector::All),
            _ => Err(ParameterError::Channel(s.to_string())),
        }
    }
}

impl fmt::Display for ChannelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
