//! Export functionality
//!
//! Provides emitters for the normalized model:
//! - CSV extracts, one file per derived table
//! - A single PostgreSQL setup script (DDL + DML + indexes + views)

pub mod csv;
pub mod sql;

/// Result of an export operation.
///
/// Contains the exported content and format identifier.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[must_use = "export results contain the exported content and should be used"]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// One rendered table extract, named after its destination file.
#[derive(Debug, Clone)]
pub struct TableExtract {
    pub file_name: &'static str,
    pub result: ExportResult,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<::csv::Error> for ExportError {
    fn from(err: ::csv::Error) -> Self {
        ExportError::SerializationError(err.to_string())
    }
}

// Re-export for convenience
pub use csv::CsvExporter;
pub use sql::SqlScriptExporter;
