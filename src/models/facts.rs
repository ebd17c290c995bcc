//! Fact tables: one row per source row, 1:1 with the employee table.

use serde::{Deserialize, Serialize};

use super::enums::Flag;

/// Compensation facts for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compensation {
    pub compensation_id: u32,
    pub employee_id: u32,
    pub monthly_income: u32,
    pub monthly_rate: u32,
    pub daily_rate: u32,
    pub hourly_rate: u32,
    pub percent_salary_hike: u32,
    pub stock_option_level: u8,
    pub standard_hours: u32,
}

/// Satisfaction survey scores for one employee. All scores are on the 1-4
/// ordinal scale enforced by the projector and by CHECK constraints in the
/// generated schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Satisfaction {
    pub satisfaction_id: u32,
    pub employee_id: u32,
    pub environment_satisfaction: u8,
    pub job_satisfaction: u8,
    pub relationship_satisfaction: u8,
    pub work_life_balance: u8,
    pub job_involvement: u8,
    pub performance_rating: u8,
}

/// Tenure metrics and attrition outcome for one employee. `over_time` and
/// `attrition` are recoded from the source's {0, 1} to [`Flag`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHistory {
    pub work_history_id: u32,
    pub employee_id: u32,
    pub total_working_years: u32,
    pub years_at_company: u32,
    pub years_in_current_role: u32,
    pub years_since_last_promotion: u32,
    pub years_with_curr_manager: u32,
    pub num_companies_worked: u32,
    pub training_times_last_year: u32,
    pub business_travel: String,
    pub over_time: Flag,
    pub attrition: Flag,
}
