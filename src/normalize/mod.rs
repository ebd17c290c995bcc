//! Normalization pipeline: dimension extraction and fact projection.
//!
//! Stage 2 derives the department and job-role dimensions with surrogate
//! keys plus the two lookup mappings; stage 3 projects the four fact tables,
//! substituting surrogate keys via those mappings. Lookups are built once and
//! passed by shared reference into the projector - no global state.

pub mod dimensions;
pub mod facts;

use tracing::info;

use crate::models::{
    Compensation, Department, Employee, JobRole, Satisfaction, SourceRecord, WorkHistory,
};
use crate::validation::ValidationError;

/// Error during normalization. Every variant is fatal: an unresolved lookup
/// indicates a mismatch between dimension extraction and fact projection and
/// must surface rather than silently default.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Unknown department '{department}' at source row {row}")]
    UnknownDepartment { row: usize, department: String },

    #[error(
        "No job role registered for ('{role}', level {level}, '{department}') at source row {row}"
    )]
    UnknownJobRole {
        row: usize,
        role: String,
        level: u8,
        department: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// All six derived tables, fully materialized.
#[derive(Debug, Clone)]
pub struct NormalizedModel {
    pub departments: Vec<Department>,
    pub job_roles: Vec<JobRole>,
    pub employees: Vec<Employee>,
    pub compensation: Vec<Compensation>,
    pub satisfaction: Vec<Satisfaction>,
    pub work_history: Vec<WorkHistory>,
}

impl NormalizedModel {
    /// Number of employees flagged as attrited.
    pub fn attrition_count(&self) -> usize {
        self.work_history
            .iter()
            .filter(|wh| wh.attrition == crate::models::Flag::Yes)
            .count()
    }
}

/// Run the full normalization over loaded source records.
pub fn normalize(records: &[SourceRecord]) -> Result<NormalizedModel, NormalizeError> {
    let extractor = DimensionExtractor::new();
    let (departments, department_ids) = extractor.extract_departments(records);
    let (job_roles, job_role_ids) = extractor.extract_job_roles(records, &department_ids)?;
    info!(
        departments = departments.len(),
        job_roles = job_roles.len(),
        "extracted dimension tables"
    );

    let projector = FactProjector::new(&department_ids, &job_role_ids);
    let model = NormalizedModel {
        employees: projector.project_employees(records)?,
        compensation: projector.project_compensation(records)?,
        satisfaction: projector.project_satisfaction(records)?,
        work_history: projector.project_work_history(records)?,
        departments,
        job_roles,
    };
    info!(employees = model.employees.len(), "projected fact tables");

    Ok(model)
}

// Re-export for convenience
pub use dimensions::DimensionExtractor;
pub use facts::FactProjector;
