//! Emitter tests: CSV extracts and the generated PostgreSQL script.

mod common;

use anyhow::Result;
use hr_normalizer::{CsvExporter, CsvImporter, SqlScriptExporter, normalize};

use common::{csv_of, row, sample_csv};

fn normalized(csv: &str) -> Result<hr_normalizer::NormalizedModel> {
    let records = CsvImporter::new().import(csv.as_bytes())?;
    Ok(normalize(&records)?)
}

#[test]
fn test_csv_extracts_have_expected_headers() -> Result<()> {
    let model = normalized(&sample_csv())?;
    let extracts = CsvExporter::new().export(&model)?;

    let expected_headers = [
        ("departments.csv", "department_id,department_name"),
        (
            "job_roles.csv",
            "job_role_id,job_role_name,job_level,department_id",
        ),
        (
            "employees.csv",
            "employee_id,age,gender,marital_status,education,education_field,\
             distance_from_home,department_id,job_role_id",
        ),
        (
            "employee_compensation.csv",
            "compensation_id,employee_id,monthly_income,monthly_rate,daily_rate,hourly_rate,\
             percent_salary_hike,stock_option_level,standard_hours",
        ),
        (
            "employee_satisfaction.csv",
            "satisfaction_id,employee_id,environment_satisfaction,job_satisfaction,\
             relationship_satisfaction,work_life_balance,job_involvement,performance_rating",
        ),
        (
            "employee_work_history.csv",
            "work_history_id,employee_id,total_working_years,years_at_company,\
             years_in_current_role,years_since_last_promotion,years_with_curr_manager,\
             num_companies_worked,training_times_last_year,business_travel,over_time,attrition",
        ),
    ];

    for (extract, (file_name, header)) in extracts.iter().zip(expected_headers) {
        assert_eq!(extract.file_name, file_name);
        assert_eq!(extract.result.content.lines().next().unwrap(), header);
    }
    Ok(())
}

#[test]
fn test_extract_row_counts_match_model() -> Result<()> {
    let model = normalized(&sample_csv())?;
    let extracts = CsvExporter::new().export(&model)?;

    // Header line plus one line per row
    let employees = &extracts[2];
    assert_eq!(
        employees.result.content.lines().count(),
        model.employees.len() + 1
    );
    Ok(())
}

#[test]
fn test_sql_script_contains_one_insert_per_row() -> Result<()> {
    let model = normalized(&sample_csv())?;
    let script = SqlScriptExporter::new().export(&model)?;
    let sql = &script.content;

    let inserts = |table: &str| {
        sql.lines()
            .filter(|l| l.starts_with(&format!("INSERT INTO {table} ")) || l.starts_with(&format!("INSERT INTO {table}(")))
            .count()
    };
    assert_eq!(inserts("departments"), model.departments.len());
    assert_eq!(inserts("job_roles"), model.job_roles.len());
    assert_eq!(inserts("employees"), 4);
    assert_eq!(inserts("employee_compensation"), 4);
    assert_eq!(inserts("employee_satisfaction"), 4);
    assert_eq!(inserts("employee_work_history"), 4);
    Ok(())
}

#[test]
fn test_sql_script_carries_domain_checks() -> Result<()> {
    let model = normalized(&sample_csv())?;
    let script = SqlScriptExporter::new().export(&model)?;
    let sql = &script.content;

    assert!(sql.contains("CHECK (age BETWEEN 18 AND 100)"));
    assert!(sql.contains("CHECK (education BETWEEN 1 AND 5)"));
    assert!(sql.contains("CHECK (job_level BETWEEN 1 AND 5)"));
    assert!(sql.contains("CHECK (stock_option_level BETWEEN 0 AND 3)"));
    assert!(sql.contains("CHECK (job_satisfaction BETWEEN 1 AND 4)"));
    assert!(sql.contains("CHECK (over_time IN ('Yes', 'No'))"));
    assert!(sql.contains("CHECK (attrition IN ('Yes', 'No'))"));
    assert!(sql.contains("UNIQUE(job_role_name, job_level, department_id)"));
    assert!(sql.contains("department_name VARCHAR(100) NOT NULL UNIQUE"));
    Ok(())
}

#[test]
fn test_sql_work_history_inserts_textual_flags() -> Result<()> {
    let model = normalized(&sample_csv())?;
    let script = SqlScriptExporter::new().export(&model)?;

    // Employee 1 worked overtime and attrited
    assert!(
        script
            .content
            .contains("INSERT INTO employee_work_history VALUES (1, 1, 8, 6, 4, 0, 5, 8, 0, 'Travel_Rarely', 'Yes', 'Yes');")
    );
    Ok(())
}

#[test]
fn test_sql_escapes_quotes_in_text_fields() -> Result<()> {
    let csv = csv_of(&[row(1, 30, "Sales 'West'", "Sales Executive", 2, 0, 0)]);
    let model = normalized(&csv)?;
    let script = SqlScriptExporter::new().export(&model)?;

    assert!(script.content.contains("'Sales ''West'''"));
    Ok(())
}

#[test]
fn test_out_of_range_rows_never_reach_the_emitter() {
    // age 150 violates the age CHECK; the projector must refuse the row
    // instead of rendering SQL a live database would reject
    let csv = csv_of(&[row(1, 150, "Sales", "Sales Executive", 2, 0, 0)]);
    let records = CsvImporter::new().import(csv.as_bytes()).unwrap();
    assert!(normalize(&records).is_err());
}
