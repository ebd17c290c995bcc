//! CSV source loader.
//!
//! Reads the flat HR export into [`SourceRecord`]s via serde. Schema is
//! assumed, not validated beyond what deserialization enforces: a missing or
//! mistyped column fails the row, and any failed row fails the load.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::info;

use super::ImportError;
use crate::models::SourceRecord;

/// CSV Importer - loads the wide source table.
#[derive(Debug, Default)]
pub struct CsvImporter;

impl CsvImporter {
    pub fn new() -> Self {
        Self
    }

    /// Load all source records from a CSV file on disk.
    pub fn import_path(&self, path: &Path) -> Result<Vec<SourceRecord>, ImportError> {
        let file = File::open(path)
            .map_err(|e| ImportError::FileRead(path.to_path_buf(), e))?;
        self.import(BufReader::new(file))
    }

    /// Load all source records from any reader, preserving row order.
    pub fn import<R: Read>(&self, reader: R) -> Result<Vec<SourceRecord>, ImportError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: SourceRecord = result?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(ImportError::Empty);
        }

        info!(rows = records.len(), "loaded source table");
        Ok(records)
    }
}
