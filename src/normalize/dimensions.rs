//! Dimension extraction: departments and job roles.

use std::collections::{BTreeSet, HashMap};

use super::NormalizeError;
use crate::models::{Department, JobRole, JobRoleKey, SourceRecord};
use crate::validation::input::{self, JOB_LEVEL_RANGE};

/// Derives the two dimension tables and their surrogate-key lookup mappings
/// from the full source row set.
#[derive(Debug, Default)]
pub struct DimensionExtractor;

impl DimensionExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the department dimension: distinct names sorted ascending,
    /// surrogate IDs 1..N assigned in that order, contiguous.
    ///
    /// Names are compared verbatim - two spellings differing in case or
    /// whitespace are distinct departments.
    pub fn extract_departments(
        &self,
        records: &[SourceRecord],
    ) -> (Vec<Department>, HashMap<String, u32>) {
        let names: BTreeSet<&str> = records.iter().map(|r| r.department.as_str()).collect();

        let mut departments = Vec::with_capacity(names.len());
        let mut ids = HashMap::with_capacity(names.len());
        for (i, name) in names.into_iter().enumerate() {
            let department_id = (i + 1) as u32;
            departments.push(Department {
                department_id,
                department_name: name.to_string(),
            });
            ids.insert(name.to_string(), department_id);
        }

        (departments, ids)
    }

    /// Extract the job-role dimension: distinct (role, level, department)
    /// triples sorted by (role, level) - department name is the deterministic
    /// tiebreaker - with surrogate IDs 1..M and the department name joined to
    /// its already-assigned ID.
    ///
    /// Job levels are range-checked here since the level becomes a dimension
    /// attribute rather than a projected fact.
    pub fn extract_job_roles(
        &self,
        records: &[SourceRecord],
        department_ids: &HashMap<String, u32>,
    ) -> Result<(Vec<JobRole>, HashMap<JobRoleKey, u32>), NormalizeError> {
        for (i, record) in records.iter().enumerate() {
            input::check_range(i + 1, "job_level", record.job_level as i64, JOB_LEVEL_RANGE)?;
        }

        // BTreeSet over the key's (role, level, department) derive order both
        // dedupes and sorts.
        let keys: BTreeSet<JobRoleKey> = records.iter().map(|r| r.job_role_key()).collect();

        let mut job_roles = Vec::with_capacity(keys.len());
        let mut ids = HashMap::with_capacity(keys.len());
        for (i, key) in keys.into_iter().enumerate() {
            let job_role_id = (i + 1) as u32;
            let department_id = *department_ids.get(&key.department).ok_or_else(|| {
                // Cannot happen when both mappings derive from the same rows,
                // but a mismatch must surface rather than default.
                let row = records
                    .iter()
                    .position(|r| r.department == key.department)
                    .map_or(0, |i| i + 1);
                NormalizeError::UnknownDepartment {
                    row,
                    department: key.department.clone(),
                }
            })?;
            job_roles.push(JobRole {
                job_role_id,
                job_role_name: key.role.clone(),
                job_level: key.level,
                department_id,
            });
            ids.insert(key, job_role_id);
        }

        Ok((job_roles, ids))
    }
}
