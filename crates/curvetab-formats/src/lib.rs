//! Curve lookup-table formats
//!
#![allow(clippy::cast_possible_truncation)] // Intentional when splitting u128 into halves
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
#![allow(clippy::doc_markdown)] // Table identifiers read better without backticks
//! This crate turns a `&[u128]` table literal declared in source text into the
//! flat binary lookup table that runtime consumers load, and reads such tables
//! back.
//!
//! # Supported Formats
//!
//! - **Source declarations**: `pub static NAME: &[u128] = &[ ... ];` with
//!   arbitrary formatting and trailing `//` comments
//! - **Binary tables**: consecutive 16-byte records, each a u128 stored as its
//!   low 64-bit half then its high 64-bit half, both little-endian. No header.
//!
//! # Example
//!
//! ```
//! use curvetab_formats::table::{BinaryTable, extract, write_table};
//!
//! let source = "pub static T: &[u128] = &[1, 2, // note\n 3];";
//! let sequence = extract(source, "T").expect("table should be found");
//! assert_eq!(sequence.to_values().expect("values fit in u128"), vec![1, 2, 3]);
//!
//! let mut bytes = Vec::new();
//! let written = write_table(&mut bytes, &sequence).expect("write should succeed");
//! assert_eq!(written, 48);
//!
//! let table = BinaryTable::parse(&bytes).expect("parse should succeed");
//! assert_eq!(table.get(2), Some(3));
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

/// Table extraction, binary records, and table files
pub mod table;
