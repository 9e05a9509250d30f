//! Conversion results.

use std::fmt;
use std::path::PathBuf;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Outcome of converting one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    /// Declaration name in the source text
    pub name: String,
    /// Human-readable label
    pub label: String,
    /// Number of values extracted and written
    pub entries: usize,
    /// Size of the written file in bytes
    pub bytes: u64,
    /// Written file
    pub path: PathBuf,
}

impl TableReport {
    /// File size in MiB
    pub fn mebibytes(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_MIB
    }
}

/// Outcome of a full conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Per-table results, in conversion order
    pub tables: Vec<TableReport>,
}

impl ConversionReport {
    /// Total bytes written across all tables
    pub fn total_bytes(&self) -> u64 {
        self.tables.iter().map(|t| t.bytes).sum()
    }

    /// Total size in MiB
    pub fn total_mebibytes(&self) -> f64 {
        self.total_bytes() as f64 / BYTES_PER_MIB
    }

    /// Report for table `name`
    pub fn table(&self, name: &str) -> Option<&TableReport> {
        self.tables.iter().find(|t| t.name == name)
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in &self.tables {
            writeln!(
                f,
                "  {}: {} entries, {} bytes ({:.2} MB) -> {}",
                table.label,
                table.entries,
                group_thousands(table.bytes),
                table.mebibytes(),
                table.path.display()
            )?;
        }
        write!(f, "  Total binary size: {:.2} MB", self.total_mebibytes())
    }
}

/// Format `n` with `,` between groups of three digits
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, entries: usize) -> TableReport {
        TableReport {
            name: name.to_string(),
            label: format!("{name} label"),
            entries,
            bytes: entries as u64 * 16,
            path: PathBuf::from(format!("/out/{name}.bin")),
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(3_360_016), "3,360,016");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(999_999), "999,999");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn test_totals() {
        let summary = ConversionReport {
            tables: vec![report("A", 210_001), report("B", 210_001)],
        };
        assert_eq!(summary.total_bytes(), 6_720_032);
        assert!((summary.total_mebibytes() - 6.408_721).abs() < 1e-3);
        assert_eq!(summary.table("B").map(|t| t.entries), Some(210_001));
        assert!(summary.table("C").is_none());
    }

    #[test]
    fn test_display() {
        let summary = ConversionReport {
            tables: vec![report("A", 210_001)],
        };
        let text = summary.to_string();
        assert!(text.contains("A label: 210001 entries, 3,360,016 bytes (3.20 MB)"));
        assert!(text.ends_with("Total binary size: 3.20 MB"));
    }
}
