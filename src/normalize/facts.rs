//! Fact projection: employees, compensation, satisfaction, work history.
//!
//! Every source row yields exactly one row per fact table; no aggregation,
//! filtering, or row removal happens here. Surrogate IDs are assigned
//! sequentially in source row order.

use std::collections::HashMap;

use super::NormalizeError;
use crate::models::{
    Compensation, Employee, Flag, JobRoleKey, Satisfaction, SourceRecord, WorkHistory,
};
use crate::validation::input::{
    self, AGE_RANGE, EDUCATION_RANGE, SCORE_RANGE, STOCK_OPTION_RANGE,
};
use crate::validation::ValidationError;

/// Projects fact tables from source rows, substituting surrogate keys via
/// the lookup mappings built by the dimension extractor. Holds the mappings
/// read-only for the duration of the run.
#[derive(Debug)]
pub struct FactProjector<'a> {
    department_ids: &'a HashMap<String, u32>,
    job_role_ids: &'a HashMap<JobRoleKey, u32>,
}

impl<'a> FactProjector<'a> {
    pub fn new(
        department_ids: &'a HashMap<String, u32>,
        job_role_ids: &'a HashMap<JobRoleKey, u32>,
    ) -> Self {
        Self {
            department_ids,
            job_role_ids,
        }
    }

    /// Project the employee table: demographics verbatim, department and job
    /// role replaced by surrogate keys. A lookup miss means the dimension
    /// extraction and this projection disagree about the source - that is a
    /// defect signal and fails the run.
    pub fn project_employees(
        &self,
        records: &[SourceRecord],
    ) -> Result<Vec<Employee>, NormalizeError> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let row = i + 1;
                input::check_range(row, "age", record.age as i64, AGE_RANGE)?;
                input::check_range(row, "education", record.education as i64, EDUCATION_RANGE)?;

                let department_id = *self.department_ids.get(&record.department).ok_or_else(
                    || NormalizeError::UnknownDepartment {
                        row,
                        department: record.department.clone(),
                    },
                )?;
                let job_role_id = *self.job_role_ids.get(&record.job_role_key()).ok_or_else(
                    || NormalizeError::UnknownJobRole {
                        row,
                        role: record.job_role.clone(),
                        level: record.job_level,
                        department: record.department.clone(),
                    },
                )?;

                Ok(Employee {
                    employee_id: record.employee_number,
                    age: record.age,
                    gender: record.gender.clone(),
                    marital_status: record.marital_status.clone(),
                    education: record.education,
                    education_field: record.education_field.clone(),
                    distance_from_home: record.distance_from_home,
                    department_id,
                    job_role_id,
                })
            })
            .collect()
    }

    /// Project compensation facts, one per source row.
    pub fn project_compensation(
        &self,
        records: &[SourceRecord],
    ) -> Result<Vec<Compensation>, NormalizeError> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let row = i + 1;
                input::check_range(
                    row,
                    "stock_option_level",
                    record.stock_option_level as i64,
                    STOCK_OPTION_RANGE,
                )?;

                Ok(Compensation {
                    compensation_id: row as u32,
                    employee_id: record.employee_number,
                    monthly_income: record.monthly_income,
                    monthly_rate: record.monthly_rate,
                    daily_rate: record.daily_rate,
                    hourly_rate: record.hourly_rate,
                    percent_salary_hike: record.percent_salary_hike,
                    stock_option_level: record.stock_option_level,
                    standard_hours: record.standard_hours,
                })
            })
            .collect()
    }

    /// Project satisfaction facts, one per source row. All six scores share
    /// the 1-4 ordinal domain.
    pub fn project_satisfaction(
        &self,
        records: &[SourceRecord],
    ) -> Result<Vec<Satisfaction>, NormalizeError> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let row = i + 1;
                let scores: [(&'static str, u8); 6] = [
                    ("environment_satisfaction", record.environment_satisfaction),
                    ("job_satisfaction", record.job_satisfaction),
                    ("relationship_satisfaction", record.relationship_satisfaction),
                    ("work_life_balance", record.work_life_balance),
                    ("job_involvement", record.job_involvement),
                    ("performance_rating", record.performance_rating),
                ];
                for (column, value) in scores {
                    input::check_range(row, column, value as i64, SCORE_RANGE)?;
                }

                Ok(Satisfaction {
                    satisfaction_id: row as u32,
                    employee_id: record.employee_number,
                    environment_satisfaction: record.environment_satisfaction,
                    job_satisfaction: record.job_satisfaction,
                    relationship_satisfaction: record.relationship_satisfaction,
                    work_life_balance: record.work_life_balance,
                    job_involvement: record.job_involvement,
                    performance_rating: record.performance_rating,
                })
            })
            .collect()
    }

    /// Project work-history facts, one per source row, recoding the two
    /// binary-coded flags to their textual domain.
    pub fn project_work_history(
        &self,
        records: &[SourceRecord],
    ) -> Result<Vec<WorkHistory>, NormalizeError> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let row = i + 1;
                let over_time = recode_flag(row, "over_time", record.over_time)?;
                let attrition = recode_flag(row, "attrition", record.attrition)?;

                Ok(WorkHistory {
                    work_history_id: row as u32,
                    employee_id: record.employee_number,
                    total_working_years: record.total_working_years,
                    years_at_company: record.years_at_company,
                    years_in_current_role: record.years_in_current_role,
                    years_since_last_promotion: record.years_since_last_promotion,
                    years_with_curr_manager: record.years_with_curr_manager,
                    num_companies_worked: record.num_companies_worked,
                    training_times_last_year: record.training_times_last_year,
                    business_travel: record.business_travel.clone(),
                    over_time,
                    attrition,
                })
            })
            .collect()
    }
}

fn recode_flag(row: usize, column: &'static str, value: u8) -> Result<Flag, NormalizeError> {
    Flag::from_binary(value).ok_or_else(|| {
        NormalizeError::Validation(ValidationError::InvalidFlag {
            row,
            column,
            value: value as i64,
        })
    })
}
