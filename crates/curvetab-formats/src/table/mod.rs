//! u128 lookup tables: source extraction and the 16-byte record format
//!
//! A table starts life as a declaration in source text:
//!
//! ```text
//! pub static DISCRETE_PRICING_TABLE: &[u128] = &[
//!     10000000000000000, // step 0
//!     10000000000000001,
//! ];
//! ```
//!
//! [`extract`] locates the declaration by name and returns its literals in
//! order as a [`ValueSequence`]. The position of a literal is the lookup key
//! used by consumers, so order is preserved exactly.
//!
//! The binary form is a flat run of [`Record`]s:
//!
//! | Offset | Size | Field                       |
//! |--------|------|-----------------------------|
//! | 0      | 8    | low 64 bits, little-endian  |
//! | 8      | 8    | high 64 bits, little-endian |
//!
//! A table of N values is exactly `16 * N` bytes. [`write_table`] and
//! [`write_to_file`] serialize a sequence, [`write_values_to_file`] writes
//! values that were already converted, and [`BinaryTable`] parses one back.

mod error;
mod extract;
mod file;
mod literal;
mod record;
mod writer;

pub use error::{Result, TableError};
pub use extract::extract;
pub use file::BinaryTable;
pub use literal::{Literal, ValueSequence};
pub use record::{RECORD_SIZE, Record};
pub use writer::{TableWriter, write_table, write_to_file, write_values_to_file};
