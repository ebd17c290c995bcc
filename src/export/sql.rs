//! PostgreSQL setup script exporter.
//!
//! Renders one self-contained script: DROP statements in reverse dependency
//! order, CREATE TABLE statements with all constraints, one INSERT per row,
//! indexes on every foreign-key column and the attrition flag, two summary
//! views, sequence resynchronization, and a final status SELECT. The script
//! is intended to be applied to an empty or freshly-dropped schema; each run
//! renders it from scratch.

use std::fmt::Write as _;

use super::{ExportError, ExportResult};
use crate::normalize::NormalizedModel;

/// File name of the generated script.
pub const SCRIPT_FILE_NAME: &str = "hr_database_setup.sql";

/// SQL script exporter for the normalized model.
#[derive(Debug, Default)]
pub struct SqlScriptExporter;

impl SqlScriptExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the full setup script.
    pub fn export(&self, model: &NormalizedModel) -> Result<ExportResult, ExportError> {
        let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        self.export_at(model, &generated_at.to_string())
    }

    /// Render with an explicit generated-at stamp. Split out so tests can
    /// produce stable output.
    pub fn export_at(
        &self,
        model: &NormalizedModel,
        generated_at: &str,
    ) -> Result<ExportResult, ExportError> {
        let mut sql = String::new();

        let _ = write!(
            sql,
            "-- =====================================================\n\
             -- HR Analytics Database - PostgreSQL Script\n\
             -- Generated by: hr-normalizer\n\
             -- Date: {generated_at}\n\
             -- =====================================================\n\n"
        );

        // Children before parents so re-runs are idempotent
        sql.push_str(
            "-- Drop tables if exists (reverse dependency order)\n\
             DROP TABLE IF EXISTS employee_work_history CASCADE;\n\
             DROP TABLE IF EXISTS employee_satisfaction CASCADE;\n\
             DROP TABLE IF EXISTS employee_compensation CASCADE;\n\
             DROP TABLE IF EXISTS employees CASCADE;\n\
             DROP TABLE IF EXISTS job_roles CASCADE;\n\
             DROP TABLE IF EXISTS departments CASCADE;\n\n",
        );

        self.render_departments(&mut sql, model);
        self.render_job_roles(&mut sql, model);
        self.render_employees(&mut sql, model);
        self.render_compensation(&mut sql, model);
        self.render_satisfaction(&mut sql, model);
        self.render_work_history(&mut sql, model);
        self.render_indexes(&mut sql);
        self.render_views(&mut sql);
        self.render_sequence_sync(&mut sql);

        sql.push_str(
            "\n-- =====================================================\n\
             -- Done\n\
             -- =====================================================\n\
             SELECT 'Database setup completed successfully!' as status;\n",
        );

        Ok(ExportResult {
            content: sql,
            format: "sql".to_string(),
        })
    }

    fn render_departments(&self, sql: &mut String, model: &NormalizedModel) {
        sql.push_str(
            "-- =====================================================\n\
             -- 1. DEPARTMENTS TABLE\n\
             -- =====================================================\n\
             CREATE TABLE departments (\n\
             \x20   department_id SERIAL PRIMARY KEY,\n\
             \x20   department_name VARCHAR(100) NOT NULL UNIQUE\n\
             );\n\n\
             -- Insert departments data\n",
        );
        for d in &model.departments {
            let _ = writeln!(
                sql,
                "INSERT INTO departments (department_id, department_name) VALUES ({}, {});",
                d.department_id,
                quote_literal(&d.department_name)
            );
        }
        sql.push('\n');
    }

    fn render_job_roles(&self, sql: &mut String, model: &NormalizedModel) {
        sql.push_str(
            "-- =====================================================\n\
             -- 2. JOB_ROLES TABLE\n\
             -- =====================================================\n\
             CREATE TABLE job_roles (\n\
             \x20   job_role_id SERIAL PRIMARY KEY,\n\
             \x20   job_role_name VARCHAR(100) NOT NULL,\n\
             \x20   job_level INTEGER NOT NULL CHECK (job_level BETWEEN 1 AND 5),\n\
             \x20   department_id INTEGER NOT NULL,\n\
             \x20   FOREIGN KEY (department_id) REFERENCES departments(department_id),\n\
             \x20   UNIQUE(job_role_name, job_level, department_id)\n\
             );\n\n\
             -- Insert job_roles data\n",
        );
        for j in &model.job_roles {
            let _ = writeln!(
                sql,
                "INSERT INTO job_roles (job_role_id, job_role_name, job_level, department_id) \
                 VALUES ({}, {}, {}, {});",
                j.job_role_id,
                quote_literal(&j.job_role_name),
                j.job_level,
                j.department_id
            );
        }
        sql.push('\n');
    }

    fn render_employees(&self, sql: &mut String, model: &NormalizedModel) {
        sql.push_str(
            "-- =====================================================\n\
             -- 3. EMPLOYEES TABLE\n\
             -- =====================================================\n\
             CREATE TABLE employees (\n\
             \x20   employee_id INTEGER PRIMARY KEY,\n\
             \x20   age INTEGER NOT NULL CHECK (age BETWEEN 18 AND 100),\n\
             \x20   gender VARCHAR(10) NOT NULL,\n\
             \x20   marital_status VARCHAR(20) NOT NULL,\n\
             \x20   education INTEGER NOT NULL CHECK (education BETWEEN 1 AND 5),\n\
             \x20   education_field VARCHAR(50) NOT NULL,\n\
             \x20   distance_from_home INTEGER NOT NULL,\n\
             \x20   department_id INTEGER NOT NULL,\n\
             \x20   job_role_id INTEGER NOT NULL,\n\
             \x20   FOREIGN KEY (department_id) REFERENCES departments(department_id),\n\
             \x20   FOREIGN KEY (job_role_id) REFERENCES job_roles(job_role_id)\n\
             );\n\n\
             -- Insert employees data\n",
        );
        for e in &model.employees {
            let _ = writeln!(
                sql,
                "INSERT INTO employees VALUES ({}, {}, {}, {}, {}, {}, {}, {}, {});",
                e.employee_id,
                e.age,
                quote_literal(&e.gender),
                quote_literal(&e.marital_status),
                e.education,
                quote_literal(&e.education_field),
                e.distance_from_home,
                e.department_id,
                e.job_role_id
            );
        }
        sql.push('\n');
    }

    fn render_compensation(&self, sql: &mut String, model: &NormalizedModel) {
        sql.push_str(
            "-- =====================================================\n\
             -- 4. EMPLOYEE_COMPENSATION TABLE\n\
             -- =====================================================\n\
             CREATE TABLE employee_compensation (\n\
             \x20   compensation_id SERIAL PRIMARY KEY,\n\
             \x20   employee_id INTEGER NOT NULL,\n\
             \x20   monthly_income INTEGER NOT NULL,\n\
             \x20   monthly_rate INTEGER NOT NULL,\n\
             \x20   daily_rate INTEGER NOT NULL,\n\
             \x20   hourly_rate INTEGER NOT NULL,\n\
             \x20   percent_salary_hike INTEGER NOT NULL,\n\
             \x20   stock_option_level INTEGER NOT NULL CHECK (stock_option_level BETWEEN 0 AND 3),\n\
             \x20   standard_hours INTEGER NOT NULL DEFAULT 80,\n\
             \x20   FOREIGN KEY (employee_id) REFERENCES employees(employee_id)\n\
             );\n\n\
             -- Insert employee_compensation data\n",
        );
        for c in &model.compensation {
            let _ = writeln!(
                sql,
                "INSERT INTO employee_compensation VALUES ({}, {}, {}, {}, {}, {}, {}, {}, {});",
                c.compensation_id,
                c.employee_id,
                c.monthly_income,
                c.monthly_rate,
                c.daily_rate,
                c.hourly_rate,
                c.percent_salary_hike,
                c.stock_option_level,
                c.standard_hours
            );
        }
        sql.push('\n');
    }

    fn render_satisfaction(&self, sql: &mut String, model: &NormalizedModel) {
        sql.push_str(
            "-- =====================================================\n\
             -- 5. EMPLOYEE_SATISFACTION TABLE\n\
             -- =====================================================\n\
             CREATE TABLE employee_satisfaction (\n\
             \x20   satisfaction_id SERIAL PRIMARY KEY,\n\
             \x20   employee_id INTEGER NOT NULL,\n\
             \x20   environment_satisfaction INTEGER NOT NULL CHECK (environment_satisfaction BETWEEN 1 AND 4),\n\
             \x20   job_satisfaction INTEGER NOT NULL CHECK (job_satisfaction BETWEEN 1 AND 4),\n\
             \x20   relationship_satisfaction INTEGER NOT NULL CHECK (relationship_satisfaction BETWEEN 1 AND 4),\n\
             \x20   work_life_balance INTEGER NOT NULL CHECK (work_life_balance BETWEEN 1 AND 4),\n\
             \x20   job_involvement INTEGER NOT NULL CHECK (job_involvement BETWEEN 1 AND 4),\n\
             \x20   performance_rating INTEGER NOT NULL CHECK (performance_rating BETWEEN 1 AND 4),\n\
             \x20   FOREIGN KEY (employee_id) REFERENCES employees(employee_id)\n\
             );\n\n\
             -- Insert employee_satisfaction data\n",
        );
        for s in &model.satisfaction {
            let _ = writeln!(
                sql,
                "INSERT INTO employee_satisfaction VALUES ({}, {}, {}, {}, {}, {}, {}, {});",
                s.satisfaction_id,
                s.employee_id,
                s.environment_satisfaction,
                s.job_satisfaction,
                s.relationship_satisfaction,
                s.work_life_balance,
                s.job_involvement,
                s.performance_rating
            );
        }
        sql.push('\n');
    }

    fn render_work_history(&self, sql: &mut String, model: &NormalizedModel) {
        sql.push_str(
            "-- =====================================================\n\
             -- 6. EMPLOYEE_WORK_HISTORY TABLE\n\
             -- =====================================================\n\
             CREATE TABLE employee_work_history (\n\
             \x20   work_history_id SERIAL PRIMARY KEY,\n\
             \x20   employee_id INTEGER NOT NULL,\n\
             \x20   total_working_years INTEGER NOT NULL,\n\
             \x20   years_at_company INTEGER NOT NULL,\n\
             \x20   years_in_current_role INTEGER NOT NULL,\n\
             \x20   years_since_last_promotion INTEGER NOT NULL,\n\
             \x20   years_with_curr_manager INTEGER NOT NULL,\n\
             \x20   num_companies_worked INTEGER NOT NULL,\n\
             \x20   training_times_last_year INTEGER NOT NULL,\n\
             \x20   business_travel VARCHAR(30) NOT NULL,\n\
             \x20   over_time VARCHAR(3) NOT NULL CHECK (over_time IN ('Yes', 'No')),\n\
             \x20   attrition VARCHAR(3) NOT NULL CHECK (attrition IN ('Yes', 'No')),\n\
             \x20   FOREIGN KEY (employee_id) REFERENCES employees(employee_id)\n\
             );\n\n\
             -- Insert employee_work_history data\n",
        );
        for w in &model.work_history {
            let _ = writeln!(
                sql,
                "INSERT INTO employee_work_history VALUES ({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {});",
                w.work_history_id,
                w.employee_id,
                w.total_working_years,
                w.years_at_company,
                w.years_in_current_role,
                w.years_since_last_promotion,
                w.years_with_curr_manager,
                w.num_companies_worked,
                w.training_times_last_year,
                quote_literal(&w.business_travel),
                quote_literal(w.over_time.as_str()),
                quote_literal(w.attrition.as_str())
            );
        }
        sql.push('\n');
    }

    fn render_indexes(&self, sql: &mut String) {
        sql.push_str(
            "-- =====================================================\n\
             -- Indexes on foreign-key columns and the attrition flag\n\
             -- =====================================================\n\
             CREATE INDEX idx_employees_dept ON employees(department_id);\n\
             CREATE INDEX idx_employees_job ON employees(job_role_id);\n\
             CREATE INDEX idx_comp_emp ON employee_compensation(employee_id);\n\
             CREATE INDEX idx_sat_emp ON employee_satisfaction(employee_id);\n\
             CREATE INDEX idx_work_emp ON employee_work_history(employee_id);\n\
             CREATE INDEX idx_work_attrition ON employee_work_history(attrition);\n\n",
        );
    }

    fn render_views(&self, sql: &mut String) {
        sql.push_str(
            "-- =====================================================\n\
             -- Summary views\n\
             -- =====================================================\n\n\
             -- View: full denormalized employee record\n\
             CREATE VIEW vw_employee_full_info AS\n\
             SELECT\n\
             \x20   e.employee_id,\n\
             \x20   e.age,\n\
             \x20   e.gender,\n\
             \x20   e.marital_status,\n\
             \x20   e.education,\n\
             \x20   e.education_field,\n\
             \x20   e.distance_from_home,\n\
             \x20   d.department_name,\n\
             \x20   jr.job_role_name,\n\
             \x20   jr.job_level,\n\
             \x20   ec.monthly_income,\n\
             \x20   ec.percent_salary_hike,\n\
             \x20   ec.stock_option_level,\n\
             \x20   es.job_satisfaction,\n\
             \x20   es.environment_satisfaction,\n\
             \x20   es.work_life_balance,\n\
             \x20   es.performance_rating,\n\
             \x20   wh.years_at_company,\n\
             \x20   wh.years_in_current_role,\n\
             \x20   wh.over_time,\n\
             \x20   wh.attrition\n\
             FROM employees e\n\
             JOIN departments d ON e.department_id = d.department_id\n\
             JOIN job_roles jr ON e.job_role_id = jr.job_role_id\n\
             JOIN employee_compensation ec ON e.employee_id = ec.employee_id\n\
             JOIN employee_satisfaction es ON e.employee_id = es.employee_id\n\
             JOIN employee_work_history wh ON e.employee_id = wh.employee_id;\n\n\
             -- View: attrition rollup per department\n\
             CREATE VIEW vw_attrition_by_department AS\n\
             SELECT\n\
             \x20   d.department_name,\n\
             \x20   COUNT(*) as total_employees,\n\
             \x20   SUM(CASE WHEN wh.attrition = 'Yes' THEN 1 ELSE 0 END) as attrition_count,\n\
             \x20   ROUND(SUM(CASE WHEN wh.attrition = 'Yes' THEN 1 ELSE 0 END)::NUMERIC / COUNT(*) * 100, 2) as attrition_rate\n\
             FROM employees e\n\
             JOIN departments d ON e.department_id = d.department_id\n\
             JOIN employee_work_history wh ON e.employee_id = wh.employee_id\n\
             GROUP BY d.department_name\n\
             ORDER BY attrition_rate DESC;\n\n",
        );
    }

    fn render_sequence_sync(&self, sql: &mut String) {
        sql.push_str(
            "-- =====================================================\n\
             -- Resynchronize sequences after explicit-ID inserts\n\
             -- =====================================================\n\
             SELECT setval('departments_department_id_seq', (SELECT MAX(department_id) FROM departments));\n\
             SELECT setval('job_roles_job_role_id_seq', (SELECT MAX(job_role_id) FROM job_roles));\n\
             SELECT setval('employee_compensation_compensation_id_seq', (SELECT MAX(compensation_id) FROM employee_compensation));\n\
             SELECT setval('employee_satisfaction_satisfaction_id_seq', (SELECT MAX(satisfaction_id) FROM employee_satisfaction));\n\
             SELECT setval('employee_work_history_work_history_id_seq', (SELECT MAX(work_history_id) FROM employee_work_history));\n",
        );
    }
}

/// Render a text value as a single-quoted SQL literal, doubling any embedded
/// quote characters. Values are inlined, so unescaped quotes would corrupt
/// the script.
fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
