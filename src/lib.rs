//! LSB Extraction Library
//!
//! Recovers candidate hidden data from the least significant bits of
//! raster images. Given a bit depth and a channel selection, the low
//! bits of every pixel are concatenated into a bit stream, regrouped
//! into bytes, rendered as text and scanned for recognisable patterns.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! raster → extraction → assembly → output
//!                           ↓
//!                       analysis (pattern detection)
//! ```
//!
//! # Scope
//!
//! - **Extraction only**: nothing is embedded or modified in the image
//! - **Heuristic**: pattern detection uses character classes, not decoding
//! - **Deterministic**: the same image and parameters give identical output
//!
//! # Example
//!
//! ```no_run
//! use lsb_extract::{
//!     analysis::PatternScanner,
//!     assembly::Assembler,
//!     extraction::{BitDepth, ChannelSelector, Extractor},
//!     raster,
//! };
//!
//! let image = raster::load("suspect.png").unwrap();
//!
//! let extractor = Extractor::new(BitDepth::new(2).unwrap(), ChannelSelector::R);
//! let bits = extractor.extract(&image);
//!
//! let assembled = Assembler::default().assemble(&bits);
//! let report = PatternScanner::new().scan(&assembled.text);
//!
//! if let Some(url) = report.url {
//!     println!("hidden URL: {url}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod assembly;
pub mod config;
pub mod extraction;
pub mod output;
pub mod pipeline;
pub mod raster;

// Re-export commonly used types at crate root
pub use analysis::{PatternReport, PatternScanner};
pub use assembly::{Assembled, Assembler};
pub use config::{FileConfig, OutputConfig};
pub use extraction::{BitDepth, BitStream, ChannelSelector, Extractor};
pub use output::{ConsoleReport, ResultWriter};
pub use pipeline::{Outcome, Pipeline, PipelineError};
pub use raster::{ColorMode, Pixel, PixelSource, Raster};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
