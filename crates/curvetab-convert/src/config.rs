//! Converter configuration.
//!
//! All configuration comes from the command line. The only default that is
//! computed rather than fixed is the output directory, which is `resources/`
//! next to the running executable.
//!
//! # Example
//!
//! ```no_run
//! use curvetab_convert::ConvertConfig;
//!
//! let config = ConvertConfig::from_args();
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading tables from: {}", config.input.display());
//! println!("Writing tables to: {}", config.output_dir().expect("output dir").display());
//! ```

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Name of the default output directory, relative to the executable
pub const DEFAULT_OUTPUT_DIR: &str = "resources";

/// Converter configuration loaded from CLI args.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "curvetab-convert",
    about = "Convert the discrete curve tables in a source file into binary lookup tables",
    version
)]
pub struct ConvertConfig {
    /// Source file declaring the curve tables
    pub input: PathBuf,

    /// Directory for the generated .bin files [default: resources/ next to the executable]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Re-read each written table and compare it with the extracted values
    #[arg(long)]
    pub verify: bool,

    /// Logging level (RUST_LOG takes precedence when set)
    #[arg(short, long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Logging verbosity
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Per-table detail
    Debug,
    /// Progress
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

impl ConvertConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Configuration for `input` with every other option at its default.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            verify: false,
            log_level: LogLevel::Info,
        }
    }

    /// Resolve the output directory.
    ///
    /// Uses `--output-dir` when given, otherwise [`DEFAULT_OUTPUT_DIR`] in the
    /// directory containing the running executable.
    pub fn output_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.output_dir {
            return Ok(dir.clone());
        }

        let exe =
            std::env::current_exe().map_err(|e| ConfigError::NoDefaultOutput(e.to_string()))?;
        let exe_dir = exe.parent().ok_or_else(|| {
            ConfigError::NoDefaultOutput(format!("{} has no parent directory", exe.display()))
        })?;
        Ok(exe_dir.join(DEFAULT_OUTPUT_DIR))
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The input file doesn't exist
    /// - An explicit output directory exists but is not a directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.input.exists() {
            return Err(ConfigError::InputNotFound(self.input.clone()));
        }

        if let Some(dir) = &self.output_dir
            && dir.exists()
            && !dir.is_dir()
        {
            return Err(ConfigError::OutputNotDirectory(dir.clone()));
        }

        Ok(())
    }
}
