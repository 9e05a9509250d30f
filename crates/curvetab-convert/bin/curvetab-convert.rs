//! Curve table converter binary entry point.
//!
//! This is a thin wrapper around the curvetab-convert library that:
//! 1. Parses command-line arguments
//! 2. Initializes logging
//! 3. Validates configuration
//! 4. Converts both tables and prints a summary
//!
//! Any error is returned from `main`, which prints it and exits non-zero.

use anyhow::Result;
use curvetab_convert::{ConvertConfig, Converter};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = ConvertConfig::from_args();

    // RUST_LOG wins over --log-level when set
    let level: Level = config.log_level.into();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    config.validate()?;

    let converter = Converter::from_config(&config)?;
    tracing::info!("Output directory: {}", converter.output_dir().display());

    let report = converter.convert_file(&config.input)?;

    println!("Done!");
    println!("{report}");

    Ok(())
}
