//! Parsed binary table

use crate::table::error::{Result, TableError};
use crate::table::record::{RECORD_SIZE, Record};
use binrw::{BinRead, BinWrite};
use std::io::Cursor;

/// A binary lookup table loaded into memory
///
/// This is the consumer's view of a table file: a flat list of u128 values
/// where the index is the lookup key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryTable {
    values: Vec<u128>,
}

impl BinaryTable {
    /// Wrap values in table order
    pub fn new(values: Vec<u128>) -> Self {
        Self { values }
    }

    /// Parse a table from its binary form
    pub fn parse(data: &[u8]) -> Result<Self> {
        if !data.len().is_multiple_of(RECORD_SIZE) {
            return Err(TableError::TruncatedRecord(data.len()));
        }

        let count = data.len() / RECORD_SIZE;
        let mut cursor = Cursor::new(data);
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let record = Record::read_le(&mut cursor)?;
            values.push(record.value());
        }

        Ok(Self { values })
    }

    /// Build the binary form
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.byte_len());
        let mut cursor = Cursor::new(&mut buffer);

        for &value in &self.values {
            Record::new(value).write_le(&mut cursor)?;
        }

        Ok(buffer)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`
    pub fn get(&self, index: usize) -> Option<u128> {
        self.values.get(index).copied()
    }

    /// All values in table order
    pub fn values(&self) -> &[u128] {
        &self.values
    }

    /// Size of the binary form in bytes
    pub fn byte_len(&self) -> usize {
        self.values.len() * RECORD_SIZE
    }
}
