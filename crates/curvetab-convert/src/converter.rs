//! Conversion pipeline: one source file in, one binary table per configured
//! declaration out.
//!
//! Every table is extracted and range-checked before the output directory is
//! created, so a missing table or an oversized literal leaves no output
//! behind. Writes then happen table by table; an I/O failure stops the run and
//! may leave earlier tables written.

use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::report::{ConversionReport, TableReport};
use curvetab_formats::table::{BinaryTable, TableError, extract, write_values_to_file};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A declaration to convert and where its binary form goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    /// Declaration name in the source text
    pub name: &'static str,
    /// Output file name inside the output directory
    pub file_name: &'static str,
    /// Human-readable label for logs and the summary
    pub label: &'static str,
}

/// Spot price per curve step
pub const PRICING_TABLE: TableSpec = TableSpec {
    name: "DISCRETE_PRICING_TABLE",
    file_name: "discrete_pricing_table.bin",
    label: "Pricing table",
};

/// Cumulative value up to each curve step
pub const CUMULATIVE_TABLE: TableSpec = TableSpec {
    name: "DISCRETE_CUMULATIVE_VALUE_TABLE",
    file_name: "discrete_cumulative_table.bin",
    label: "Cumulative table",
};

/// Tables converted by default, in order
pub const DEFAULT_TABLES: [TableSpec; 2] = [PRICING_TABLE, CUMULATIVE_TABLE];

/// Converts source-declared tables into binary table files
#[derive(Debug, Clone)]
pub struct Converter {
    output_dir: PathBuf,
    tables: Vec<TableSpec>,
    verify: bool,
}

impl Converter {
    /// Converter writing the default tables into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            tables: DEFAULT_TABLES.to_vec(),
            verify: false,
        }
    }

    /// Converter for a validated configuration
    pub fn from_config(config: &ConvertConfig) -> Result<Self> {
        let output_dir = config.output_dir()?;
        Ok(Self::new(output_dir).with_verify(config.verify))
    }

    /// Replace the set of tables to convert
    #[must_use]
    pub fn with_tables(mut self, tables: Vec<TableSpec>) -> Self {
        self.tables = tables;
        self
    }

    /// Re-read and compare every table after writing it
    #[must_use]
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path a table is written to
    pub fn output_path(&self, spec: &TableSpec) -> PathBuf {
        self.output_dir.join(spec.file_name)
    }

    /// Read `input` once and convert every configured table
    pub fn convert_file(&self, input: &Path) -> Result<ConversionReport> {
        info!("Reading {}", input.display());
        let read_failed = |source| ConvertError::ReadSource {
            path: input.to_path_buf(),
            source,
        };
        let source = std::fs::read_to_string(input).map_err(read_failed)?;

        self.convert_source(&source)
    }

    /// Convert every configured table found in `source`
    pub fn convert_source(&self, source: &str) -> Result<ConversionReport> {
        let mut extracted = Vec::with_capacity(self.tables.len());
        for spec in &self.tables {
            info!("Extracting {}", spec.label.to_lowercase());
            let values = extract_table(source, spec)?;
            info!("  Found {} entries", values.len());
            extracted.push((spec, values));
        }

        let create_failed = |source| ConvertError::CreateOutputDir {
            path: self.output_dir.clone(),
            source,
        };
        std::fs::create_dir_all(&self.output_dir).map_err(create_failed)?;

        let mut report = ConversionReport::default();
        for (spec, values) in &extracted {
            report.tables.push(self.write(spec, values)?);
        }

        Ok(report)
    }

    fn write(&self, spec: &TableSpec, values: &[u128]) -> Result<TableReport> {
        let path = self.output_path(spec);
        info!("Writing {}", path.display());

        let write_failed = |source| ConvertError::WriteTable {
            path: path.clone(),
            source,
        };
        let bytes = write_values_to_file(&path, values).map_err(write_failed)?;
        debug!(table = spec.name, entries = values.len(), bytes, "table written");

        if self.verify {
            verify_written(&path, values)?;
            debug!(table = spec.name, "verified");
        }

        let report = TableReport {
            name: spec.name.to_string(),
            label: spec.label.to_string(),
            entries: values.len(),
            bytes,
            path,
        };
        info!("  Size: {} bytes ({:.2} MB)", report.bytes, report.mebibytes());
        Ok(report)
    }
}

/// Extract one table and convert it to values, failing on any literal that
/// does not fit in u128
fn extract_table(source: &str, spec: &TableSpec) -> Result<Vec<u128>> {
    let to_error = |source: TableError| ConvertError::Extract {
        table: spec.name.to_string(),
        source,
    };

    extract(source, spec.name)
        .and_then(|sequence| sequence.to_values())
        .map_err(to_error)
}

/// Decode a written file and compare it with the values it was written from
fn verify_written(path: &Path, expected: &[u128]) -> Result<()> {
    let failed = |reason: String| ConvertError::VerifyFailed {
        path: path.to_path_buf(),
        reason,
    };

    let data = std::fs::read(path).map_err(|e| failed(e.to_string()))?;
    let table = BinaryTable::parse(&data).map_err(|e| failed(e.to_string()))?;

    if table.len() != expected.len() {
        return Err(failed(format!(
            "expected {} entries, file holds {}",
            expected.len(),
            table.len()
        )));
    }

    if let Some(index) = table
        .values()
        .iter()
        .zip(expected)
        .position(|(read, want)| read != want)
    {
        return Err(failed(format!("entry {index} differs")));
    }

    Ok(())
}
