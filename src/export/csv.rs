//! CSV extract exporter.
//!
//! Serializes each of the six derived tables to delimited text with a header
//! row. Column order follows struct field order, which matches the generated
//! SQL schema.

use serde::Serialize;

use super::{ExportError, ExportResult, TableExtract};
use crate::normalize::NormalizedModel;

/// File names of the six extracts, in dependency order.
pub const EXTRACT_FILE_NAMES: [&str; 6] = [
    "departments.csv",
    "job_roles.csv",
    "employees.csv",
    "employee_compensation.csv",
    "employee_satisfaction.csv",
    "employee_work_history.csv",
];

/// CSV exporter for the normalized model.
#[derive(Debug, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render all six table extracts, in dependency order.
    pub fn export(&self, model: &NormalizedModel) -> Result<Vec<TableExtract>, ExportError> {
        Ok(vec![
            extract(EXTRACT_FILE_NAMES[0], &model.departments)?,
            extract(EXTRACT_FILE_NAMES[1], &model.job_roles)?,
            extract(EXTRACT_FILE_NAMES[2], &model.employees)?,
            extract(EXTRACT_FILE_NAMES[3], &model.compensation)?,
            extract(EXTRACT_FILE_NAMES[4], &model.satisfaction)?,
            extract(EXTRACT_FILE_NAMES[5], &model.work_history)?,
        ])
    }
}

fn extract<T: Serialize>(
    file_name: &'static str,
    rows: &[T],
) -> Result<TableExtract, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::IoError(e.to_string()))?;
    let content =
        String::from_utf8(bytes).map_err(|e| ExportError::SerializationError(e.to_string()))?;

    Ok(TableExtract {
        file_name,
        result: ExportResult {
            content,
            format: "csv".to_string(),
        },
    })
}
