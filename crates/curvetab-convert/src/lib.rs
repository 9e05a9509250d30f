//! Curve table converter.
//!
//! Reads a source file declaring the discrete bonding curve tables as
//! `&[u128]` literals and writes each one as a flat binary lookup table:
//! - `DISCRETE_PRICING_TABLE` to `discrete_pricing_table.bin`
//! - `DISCRETE_CUMULATIVE_VALUE_TABLE` to `discrete_cumulative_table.bin`
//!
//! # Architecture
//!
//! - `config`: CLI configuration and validation
//! - `converter`: extraction and writing of the configured tables
//! - `report`: per-table entry counts and sizes
//! - `error`: error types
//!
//! The table formats themselves live in `curvetab-formats`.
//!
//! # Example
//!
//! ```no_run
//! use curvetab_convert::{ConvertConfig, Converter};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConvertConfig::from_args();
//!     config.validate()?;
//!
//!     let report = Converter::from_config(&config)?.convert_file(&config.input)?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_precision_loss)] // Sizes are only displayed in MB

// Module declarations
pub mod config;
pub mod converter;
pub mod error;
pub mod report;

// Re-exports for public API
pub use config::{ConvertConfig, DEFAULT_OUTPUT_DIR, LogLevel};
pub use converter::{CUMULATIVE_TABLE, Converter, DEFAULT_TABLES, PRICING_TABLE, TableSpec};
pub use error::{ConfigError, ConvertError};
pub use report::{ConversionReport, TableReport};
