//! Streaming writer for binary tables

use crate::table::error::Result;
use crate::table::literal::ValueSequence;
use crate::table::record::{RECORD_SIZE, Record};
use binrw::BinWrite;
use binrw::io::NoSeek;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary table writer
///
/// Records are buffered and written back to back with no header or padding.
/// Call [`TableWriter::finish`] to flush; dropping the writer flushes on a
/// best-effort basis only.
pub struct TableWriter<W: Write> {
    writer: NoSeek<BufWriter<W>>,
    records: u64,
}

impl<W: Write> TableWriter<W> {
    /// Create a new writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: NoSeek::new(BufWriter::new(writer)),
            records: 0,
        }
    }

    /// Write a single value as one record
    pub fn write_value(&mut self, value: u128) -> Result<()> {
        Record::new(value).write_le(&mut self.writer)?;
        self.records += 1;
        Ok(())
    }

    /// Write values in order
    pub fn write_values(&mut self, values: &[u128]) -> Result<()> {
        for &value in values {
            self.write_value(value)?;
        }
        Ok(())
    }

    /// Number of records written so far
    pub fn records_written(&self) -> u64 {
        self.records
    }

    /// Number of bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.records * RECORD_SIZE as u64
    }

    /// Flush buffered records and return the inner writer
    pub fn finish(self) -> Result<W> {
        let mut buffered = self.writer.into_inner();
        buffered.flush()?;
        buffered
            .into_inner()
            .map_err(|e| std::io::IntoInnerError::into_error(e).into())
    }
}

/// Write a sequence to `writer`, returning the number of bytes written
///
/// Every literal is checked against the u128 range before the first byte is
/// written, so an overflow leaves `writer` untouched.
pub fn write_table<W: Write>(writer: W, sequence: &ValueSequence) -> Result<u64> {
    let values = sequence.to_values()?;

    let mut table_writer = TableWriter::new(writer);
    table_writer.write_values(&values)?;
    let written = table_writer.bytes_written();
    table_writer.finish()?;

    Ok(written)
}

/// Write a sequence to a file, creating or truncating it
///
/// The file is only created once every literal has been validated. The
/// handle is closed on return, including on error.
pub fn write_to_file<P: AsRef<Path>>(path: P, sequence: &ValueSequence) -> Result<u64> {
    let values = sequence.to_values()?;
    write_values_to_file(path, &values)
}

/// Write already-validated values to a file, creating or truncating it
pub fn write_values_to_file<P: AsRef<Path>>(path: P, values: &[u128]) -> Result<u64> {
    let file = File::create(path)?;
    let mut table_writer = TableWriter::new(file);
    table_writer.write_values(values)?;
    let written = table_writer.bytes_written();
    table_writer.finish()?.sync_all()?;

    Ok(written)
}
