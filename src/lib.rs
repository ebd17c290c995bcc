//! HR Dataset Normalizer - decomposes the flat IBM HR Analytics attrition
//! CSV into a normalized (3NF) relational schema.
//!
//! Provides a four-stage batch pipeline:
//! - Loading the wide source CSV into typed records
//! - Extracting dimension tables (departments, job roles) with surrogate keys
//! - Projecting fact tables (employees, compensation, satisfaction, work history)
//! - Emitting per-table CSV extracts and a PostgreSQL setup script
//!
//! Data flows strictly forward; each run regenerates all outputs from scratch.

pub mod cli;
pub mod export;
pub mod import;
pub mod models;
pub mod normalize;
pub mod validation;

// Re-export commonly used types
pub use export::{CsvExporter, ExportError, ExportResult, SqlScriptExporter, TableExtract};
pub use import::{CsvImporter, ImportError};
pub use normalize::{
    DimensionExtractor, FactProjector, NormalizeError, NormalizedModel, normalize,
};
pub use validation::input::ValidationError;

// Re-export models
pub use models::enums::Flag;
pub use models::{
    Compensation, Department, Employee, JobRole, JobRoleKey, Satisfaction, SourceRecord,
    WorkHistory,
};
