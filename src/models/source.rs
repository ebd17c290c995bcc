//! Raw source row as it appears in the wide HR CSV.

use serde::Deserialize;

use super::dimensions::JobRoleKey;

/// One row of the flat source table, column names matching the IBM HR
/// Analytics CSV headers. This is the only loosely typed intermediate; all
/// downstream tables are projected from it without modification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceRecord {
    // Identity and demographics
    pub employee_number: u32,
    pub age: u8,
    pub gender: String,
    pub marital_status: String,
    pub education: u8,
    pub education_field: String,
    pub distance_from_home: u32,

    // Dimension attributes
    pub department: String,
    pub job_role: String,
    pub job_level: u8,

    // Compensation
    pub monthly_income: u32,
    pub monthly_rate: u32,
    pub daily_rate: u32,
    pub hourly_rate: u32,
    pub percent_salary_hike: u32,
    pub stock_option_level: u8,
    pub standard_hours: u32,

    // Satisfaction survey scores
    pub environment_satisfaction: u8,
    pub job_satisfaction: u8,
    pub relationship_satisfaction: u8,
    pub work_life_balance: u8,
    pub job_involvement: u8,
    pub performance_rating: u8,

    // Work history and tenure
    pub total_working_years: u32,
    pub years_at_company: u32,
    pub years_in_current_role: u32,
    pub years_since_last_promotion: u32,
    pub years_with_curr_manager: u32,
    pub num_companies_worked: u32,
    pub training_times_last_year: u32,
    pub business_travel: String,

    // Binary-coded flags, recoded to text during projection
    pub over_time: u8,
    pub attrition: u8,
}

impl SourceRecord {
    /// The composite dimension key identifying this row's job role.
    pub fn job_role_key(&self) -> JobRoleKey {
        JobRoleKey {
            role: self.job_role.clone(),
            level: self.job_level,
            department: self.department.clone(),
        }
    }
}
