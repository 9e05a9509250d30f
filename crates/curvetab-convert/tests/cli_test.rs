//! End-to-end tests running the converter binary against temporary files.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use curvetab_convert::{CUMULATIVE_TABLE, ConvertConfig, Converter, PRICING_TABLE};
use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const TABLES: &str = "\
//! Curve tables

pub static DISCRETE_PRICING_TABLE: &[u128] = &[
    10000000000000000, // step 0
    10000000087600000, // step 1
    18446744073709551616,
];

pub static DISCRETE_CUMULATIVE_VALUE_TABLE: &[u128] = &[
    0,
    1000000000000000000, // 100 tokens * step 0 price
];
";

fn write_source(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("table.rs");
    std::fs::write(&path, contents).expect("Failed to write source file");
    path
}

fn run(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_curvetab-convert"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run curvetab-convert")
}

fn decode(path: &Path) -> Vec<u128> {
    std::fs::read(path)
        .expect("Failed to read table")
        .chunks_exact(16)
        .map(|chunk| u128::from_le_bytes(chunk.try_into().unwrap()))
        .collect()
}

#[test]
fn converts_both_tables() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, TABLES);
    let out = dir.path().join("resources");

    let output = Command::new(env!("CARGO_BIN_EXE_curvetab-convert"))
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .arg("--verify")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pricing table: 3 entries, 48 bytes"));
    assert!(stdout.contains("Cumulative table: 2 entries, 32 bytes"));

    assert_eq!(
        decode(&out.join(PRICING_TABLE.file_name)),
        vec![10000000000000000, 10000000087600000, 1u128 << 64]
    );
    assert_eq!(
        decode(&out.join(CUMULATIVE_TABLE.file_name)),
        vec![0, 1000000000000000000]
    );
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.rs");

    let output = run(&[missing.as_path()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Input file not found"));
}

#[test]
fn missing_table_fails_with_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "pub static DISCRETE_PRICING_TABLE: &[u128] = &[1, 2];");
    let out = dir.path().join("out");

    let output = Command::new(env!("CARGO_BIN_EXE_curvetab-convert"))
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DISCRETE_CUMULATIVE_VALUE_TABLE"));
    assert!(!out.exists());
}

#[test]
fn library_conversion_matches_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, TABLES);

    let mut config = ConvertConfig::for_input(&input);
    config.output_dir = Some(dir.path().join("lib-out"));
    config.validate().unwrap();

    let report = Converter::from_config(&config)
        .unwrap()
        .convert_file(&config.input)
        .unwrap();

    assert_eq!(report.total_bytes(), 80);
    let pricing = report.table(PRICING_TABLE.name).unwrap();
    assert_eq!(pricing.entries, 3);
    assert_eq!(std::fs::metadata(&pricing.path).unwrap().len(), pricing.bytes);
}

#[test]
fn empty_tables_produce_empty_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(
        &dir,
        "pub static DISCRETE_PRICING_TABLE: &[u128] = &[];\npub static DISCRETE_CUMULATIVE_VALUE_TABLE: &[u128] = &[\n];\n",
    );
    let out = dir.path().join("out");

    let report = Converter::new(&out).convert_file(&input).unwrap();
    assert_eq!(report.total_bytes(), 0);
    let pricing = out.join(PRICING_TABLE.file_name);
    let cumulative = out.join(CUMULATIVE_TABLE.file_name);
    assert_eq!(std::fs::metadata(&pricing).unwrap().len(), 0);
    assert_eq!(std::fs::metadata(&cumulative).unwrap().len(), 0);
}
