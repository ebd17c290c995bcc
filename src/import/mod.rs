//! Import functionality
//!
//! Provides the loader for the wide source CSV. The loader performs no
//! transformation: it preserves column names, types them per
//! [`crate::models::SourceRecord`], and keeps source row order.

pub mod csv;

use std::path::PathBuf;

/// Error during import. Any import error is fatal and aborts the run before
/// output is produced.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Failed to read source file {0}: {1}")]
    FileRead(PathBuf, std::io::Error),
    #[error("Failed to parse source CSV: {0}")]
    CsvParse(#[from] ::csv::Error),
    #[error("Source file contains no data rows")]
    Empty,
}

// Re-export for convenience
pub use csv::CsvImporter;
