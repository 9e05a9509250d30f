//! Error types for the table converter.
//!
//! All errors use thiserror and carry the path or table they relate to, so the
//! binary can print them verbatim.

use curvetab_formats::table::TableError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Source file does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Output directory path exists but is not a directory
    #[error("Output path is not a directory: {}", .0.display())]
    OutputNotDirectory(PathBuf),

    /// Default output directory could not be derived
    #[error("Cannot determine default output directory: {0}")]
    NoDefaultOutput(String),
}

/// Conversion errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to read the source file
    #[error("Failed to read {}: {source}", .path.display())]
    ReadSource {
        /// Source file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the output directory
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        /// Directory path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Table could not be extracted from the source text
    #[error("Failed to extract {table}: {source}")]
    Extract {
        /// Table name
        table: String,
        /// Underlying table error
        #[source]
        source: TableError,
    },

    /// Table could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    WriteTable {
        /// Output file path
        path: PathBuf,
        /// Underlying table error
        #[source]
        source: TableError,
    },

    /// Written table does not decode to the extracted values
    #[error("Verification failed for {}: {reason}", .path.display())]
    VerifyFailed {
        /// Output file path
        path: PathBuf,
        /// What did not match
        reason: String,
    },
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
