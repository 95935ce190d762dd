//! LSB Extraction CLI
//!
//! Extracts least-significant-bit data from an image, prints a preview
//! with pattern findings and saves text and raw byte reconstructions.

use clap::Parser;
use lsb_extract::{
    config::FileConfig,
    extraction::ChannelSelector,
    output::ConsoleReport,
    pipeline::{Pipeline, PipelineError},
};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Extract least significant bits from image channels
#[derive(Parser)]
#[command(name = "lsb-extract")]
#[command(version)]
#[command(about = "Extract least-significant-bit data from image channels")]
struct Cli {
    /// Path to image file
    image: PathBuf,

    /// Number of LSBs to extract per channel (1-8)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=8))]
    bit_depth: Option<u8>,

    /// Channel to extract: r, g, b, a, or all
    #[arg(value_parser = ChannelSelector::from_str)]
    channel: Option<ChannelSelector>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for result files (overrides the configured one)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<(), PipelineError> {
    let mut config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    if let Some(bits) = cli.bit_depth {
        config.extraction.bit_depth = bits.into();
    }
    if let Some(channel) = cli.channel {
        config.extraction.channel = channel.token().to_string();
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.clone();
    }
    debug!(?config, "Effective configuration");

    let pipeline = Pipeline::from_config(&config)?;
    let outcome = pipeline.run(&cli.image)?;

    println!("{}", ConsoleReport::new(&outcome, &config.report));
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    debug!("LSB Extract v{}", lsb_extract::VERSION);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
