//! Dataset Module - Table Persistence
//!
//! Versioned column schema and the CSV writer the driver hands finished
//! datasets to. Generation itself never touches the filesystem.

pub mod schema;
pub mod writer;

#[cfg(test)]
mod tests;

pub use writer::DatasetWriter;
