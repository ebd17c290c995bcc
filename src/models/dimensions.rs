//! Dimension tables: departments and job roles.

use serde::{Deserialize, Serialize};

/// A department, keyed by a surrogate ID assigned 1..N in ascending name
/// order. Names are taken verbatim from the source; spellings differing in
/// case or whitespace are distinct departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub department_id: u32,
    pub department_name: String,
}

/// A job role, uniquely identified by (role name, level, department).
/// Duplicate triples in the source collapse to one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRole {
    pub job_role_id: u32,
    pub job_role_name: String,
    pub job_level: u8,
    pub department_id: u32,
}

/// Composite lookup key for the job-role dimension, built before department
/// IDs are assigned and therefore carrying the department *name*.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobRoleKey {
    pub role: String,
    pub level: u8,
    pub department: String,
}
