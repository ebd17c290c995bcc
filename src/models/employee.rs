//! Employee entity table.

use serde::{Deserialize, Serialize};

/// One employee, keyed by the source-provided employee number (natural key).
/// Department and job role are replaced by foreign keys into the dimension
/// tables during projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: u32,
    pub age: u8,
    pub gender: String,
    pub marital_status: String,
    pub education: u8,
    pub education_field: String,
    pub distance_from_home: u32,
    pub department_id: u32,
    pub job_role_id: u32,
}
