//! Shared fixtures for integration tests.

/// Header row matching the IBM HR Analytics export.
pub const HEADER: &str = "EmployeeNumber,Age,Gender,MaritalStatus,Education,EducationField,\
DistanceFromHome,Department,JobRole,JobLevel,MonthlyIncome,MonthlyRate,DailyRate,HourlyRate,\
PercentSalaryHike,StockOptionLevel,StandardHours,EnvironmentSatisfaction,JobSatisfaction,\
RelationshipSatisfaction,WorkLifeBalance,JobInvolvement,PerformanceRating,TotalWorkingYears,\
YearsAtCompany,YearsInCurrentRole,YearsSinceLastPromotion,YearsWithCurrManager,\
NumCompaniesWorked,TrainingTimesLastYear,BusinessTravel,OverTime,Attrition";

/// One source row with fixed filler values for the columns a test does not
/// care about.
pub fn row(
    employee_number: u32,
    age: u8,
    department: &str,
    job_role: &str,
    job_level: u8,
    over_time: u8,
    attrition: u8,
) -> String {
    format!(
        "{employee_number},{age},Female,Single,3,Life Sciences,4,{department},{job_role},\
         {job_level},5993,19479,1102,94,11,0,80,2,4,1,1,3,3,8,6,4,0,5,8,0,Travel_Rarely,\
         {over_time},{attrition}"
    )
}

/// Assemble a complete CSV document from data rows.
pub fn csv_of(rows: &[String]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for r in rows {
        out.push_str(r);
        out.push('\n');
    }
    out
}

/// Three-department, four-row sample with one shared job-role triple and one
/// attrited employee.
pub fn sample_csv() -> String {
    csv_of(&[
        row(1, 41, "Sales", "Sales Executive", 2, 1, 1),
        row(2, 49, "Research & Development", "Research Scientist", 2, 0, 0),
        row(4, 37, "Sales", "Sales Executive", 2, 1, 0),
        row(5, 33, "Human Resources", "Human Resources", 1, 0, 0),
    ])
}
