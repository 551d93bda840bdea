//! Dataset Writer - delimited table output
//!
//! Writes one finished dataset as a UTF-8 CSV table: header row from the
//! versioned column layout, one row per sample, timestamped file name so
//! repeated runs never clobber each other.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::super::assembler::Dataset;
use super::schema;

pub struct DatasetWriter {
    base_dir: PathBuf,
}

impl DatasetWriter {
    /// Writer rooted at the platform data dir (override via the driver's
    /// output-dir env var)
    pub fn new() -> Self {
        let base_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("liftsense")
            .join("dataset");
        Self::from_path(base_dir)
    }

    pub fn from_path(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Write the dataset as `telemetry-<timestamp>.csv`, returning the path
    pub fn write(&self, dataset: &Dataset) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.base_dir)?;

        let filename = format!("telemetry-{}.csv", Utc::now().format("%Y-%m-%d-%H%M%S"));
        let path = self.base_dir.join(filename);
        let mut file = BufWriter::new(File::create(&path)?);

        writeln!(file, "{}", schema::COLUMN_LAYOUT.join(","))?;
        for sample in &dataset.samples {
            writeln!(file, "{}", schema::row(sample).join(","))?;
        }
        file.flush()?;

        log::info!(
            "wrote {} rows ({} columns, schema v{}, layout {:08x}) to {}",
            dataset.len(),
            schema::COLUMN_COUNT,
            schema::SCHEMA_VERSION,
            schema::layout_hash(),
            path.display()
        );
        Ok(path)
    }
}

impl Default for DatasetWriter {
    fn default() -> Self {
        Self::new()
    }
}
