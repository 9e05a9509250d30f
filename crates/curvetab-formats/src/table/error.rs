//! Error types for table extraction and the binary table format

use thiserror::Error;

/// Errors that can occur when extracting, writing, or parsing tables
#[derive(Debug, Error)]
pub enum TableError {
    /// No declaration with the requested name exists in the source text
    #[error("Could not find table: {0}")]
    TableNotFound(String),

    /// The requested name is not a valid identifier
    #[error("Invalid table name '{0}': expected an identifier")]
    InvalidTableName(String),

    /// A literal does not fit in 128 bits
    #[error(
        "Value at index {index} of table {table} (line {line}) does not fit in u128: {literal}"
    )]
    Overflow {
        /// Table the literal was extracted from
        table: String,
        /// Position of the literal in the sequence
        index: usize,
        /// 1-based source line of the literal
        line: usize,
        /// The literal's digits
        literal: String,
    },

    /// Binary table length is not a whole number of records
    #[error("Truncated record: table data is {0} bytes, not a multiple of 16")]
    TruncatedRecord(usize),

    /// Declaration pattern could not be compiled
    #[error("Invalid declaration pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// IO error during writing or reading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary read/write error
    #[error("Binary parsing error: {0}")]
    BinRw(#[from] binrw::Error),
}

/// Result type alias for table operations
pub type Result<T> = std::result::Result<T, TableError>;
