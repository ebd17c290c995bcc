//! Full-pipeline property tests: load, normalize, and verify the invariants
//! the derived tables must hold.

mod common;

use std::collections::HashSet;

use anyhow::Result;
use hr_normalizer::{CsvImporter, Flag, NormalizeError, normalize};

use common::{csv_of, row, sample_csv};

fn normalized(csv: &str) -> Result<hr_normalizer::NormalizedModel> {
    let records = CsvImporter::new().import(csv.as_bytes())?;
    Ok(normalize(&records)?)
}

#[test]
fn test_employee_ids_bijective_with_source() -> Result<()> {
    let model = normalized(&sample_csv())?;

    assert_eq!(model.employees.len(), 4);
    let ids: HashSet<u32> = model.employees.iter().map(|e| e.employee_id).collect();
    assert_eq!(ids, HashSet::from([1, 2, 4, 5]));
    Ok(())
}

#[test]
fn test_referential_integrity_holds() -> Result<()> {
    let model = normalized(&sample_csv())?;

    let department_ids: HashSet<u32> =
        model.departments.iter().map(|d| d.department_id).collect();
    let job_role_ids: HashSet<u32> = model.job_roles.iter().map(|j| j.job_role_id).collect();

    for employee in &model.employees {
        assert!(department_ids.contains(&employee.department_id));
        assert!(job_role_ids.contains(&employee.job_role_id));
    }
    for job_role in &model.job_roles {
        assert!(department_ids.contains(&job_role.department_id));
    }
    Ok(())
}

#[test]
fn test_dimensions_have_no_duplicates() -> Result<()> {
    let model = normalized(&sample_csv())?;

    let names: HashSet<&str> = model
        .departments
        .iter()
        .map(|d| d.department_name.as_str())
        .collect();
    assert_eq!(names.len(), model.departments.len());

    let triples: HashSet<(&str, u8, u32)> = model
        .job_roles
        .iter()
        .map(|j| (j.job_role_name.as_str(), j.job_level, j.department_id))
        .collect();
    assert_eq!(triples.len(), model.job_roles.len());
    Ok(())
}

#[test]
fn test_fact_tables_one_row_per_employee() -> Result<()> {
    let model = normalized(&sample_csv())?;
    let n = model.employees.len();

    assert_eq!(model.compensation.len(), n);
    assert_eq!(model.satisfaction.len(), n);
    assert_eq!(model.work_history.len(), n);

    let comp_ids: HashSet<u32> = model.compensation.iter().map(|c| c.employee_id).collect();
    let sat_ids: HashSet<u32> = model.satisfaction.iter().map(|s| s.employee_id).collect();
    let wh_ids: HashSet<u32> = model.work_history.iter().map(|w| w.employee_id).collect();
    assert_eq!(comp_ids.len(), n);
    assert_eq!(sat_ids.len(), n);
    assert_eq!(wh_ids.len(), n);
    Ok(())
}

#[test]
fn test_department_ids_follow_sorted_name_order() -> Result<()> {
    // "R&D" < "Sales" lexicographically, so both Sales rows carry ID 2
    let csv = csv_of(&[
        row(1, 30, "Sales", "Sales Executive", 2, 0, 0),
        row(2, 31, "Sales", "Sales Executive", 2, 0, 0),
        row(3, 32, "R&D", "Research Scientist", 1, 0, 0),
    ]);
    let model = normalized(&csv)?;

    assert_eq!(model.departments.len(), 2);
    assert_eq!(model.departments[0].department_name, "R&D");
    assert_eq!(model.departments[0].department_id, 1);
    assert_eq!(model.departments[1].department_name, "Sales");
    assert_eq!(model.departments[1].department_id, 2);

    for employee in model.employees.iter().filter(|e| e.employee_id != 3) {
        assert_eq!(employee.department_id, 2);
    }
    Ok(())
}

#[test]
fn test_shared_triple_collapses_to_one_job_role() -> Result<()> {
    let csv = csv_of(&[
        row(1, 30, "Sales", "Sales Executive", 2, 0, 0),
        row(2, 31, "Sales", "Sales Executive", 2, 0, 0),
    ]);
    let model = normalized(&csv)?;

    assert_eq!(model.job_roles.len(), 1);
    assert_eq!(
        model.employees[0].job_role_id,
        model.employees[1].job_role_id
    );
    Ok(())
}

#[test]
fn test_attrition_recoding() -> Result<()> {
    let model = normalized(&sample_csv())?;

    assert_eq!(model.attrition_count(), 1);
    let attrited = model
        .work_history
        .iter()
        .find(|w| w.attrition == Flag::Yes)
        .unwrap();
    assert_eq!(attrited.employee_id, 1);
    assert_eq!(attrited.over_time, Flag::Yes);
    Ok(())
}

#[test]
fn test_out_of_range_age_fails_normalization() {
    let csv = csv_of(&[row(1, 150, "Sales", "Sales Executive", 2, 0, 0)]);
    let records = CsvImporter::new().import(csv.as_bytes()).unwrap();
    let err = normalize(&records).unwrap_err();
    assert!(matches!(err, NormalizeError::Validation(_)));
}

#[test]
fn test_flag_outside_binary_domain_fails_normalization() {
    let csv = csv_of(&[row(1, 30, "Sales", "Sales Executive", 2, 0, 3)]);
    let records = CsvImporter::new().import(csv.as_bytes()).unwrap();
    assert!(normalize(&records).is_err());
}
