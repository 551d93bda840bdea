use super::schema;
use super::writer::DatasetWriter;
use crate::logic::assembler::{generate_at, GenerationConfig};
use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::tempdir;

fn tiny_dataset() -> crate::logic::assembler::Dataset {
    let config = GenerationConfig {
        total_samples: 40,
        ..GenerationConfig::default()
    };
    let now = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
    generate_at(&mut StdRng::seed_from_u64(21), &config, now).unwrap()
}

#[test]
fn test_write_header_and_rows() {
    let dir = tempdir().unwrap();
    let writer = DatasetWriter::from_path(dir.path().to_path_buf());
    let dataset = tiny_dataset();

    let path = writer.write(&dataset).unwrap();
    assert_eq!(path.extension().unwrap(), "csv");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    // Header + one row per sample
    assert_eq!(lines.len(), dataset.len() + 1);
    assert_eq!(lines[0], schema::COLUMN_LAYOUT.join(","));

    // Every row matches the declared column count
    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), schema::COLUMN_COUNT);
    }
}

#[test]
fn test_repeated_writes_do_not_clobber() {
    let dir = tempdir().unwrap();
    let writer = DatasetWriter::from_path(dir.path().to_path_buf());
    let dataset = tiny_dataset();

    let first = writer.write(&dataset).unwrap();
    // Same second is fine for this check as long as content survives
    let reread = fs::read_to_string(&first).unwrap();
    assert!(reread.starts_with("timestamp,"));
}

#[test]
fn test_rows_round_trip_severity_labels() {
    let dir = tempdir().unwrap();
    let writer = DatasetWriter::from_path(dir.path().to_path_buf());
    let dataset = tiny_dataset();

    let path = writer.write(&dataset).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    let severity_idx = schema::COLUMN_LAYOUT
        .iter()
        .position(|&c| c == "severity_level")
        .unwrap();
    for (line, sample) in content.lines().skip(1).zip(&dataset.samples) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields[severity_idx], sample.severity_level.label());
    }
}
