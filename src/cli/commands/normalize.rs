//! Normalize command handler: full pipeline with atomic output publishing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::error::CliError;
use crate::export::{CsvExporter, SqlScriptExporter, sql::SCRIPT_FILE_NAME};
use crate::import::CsvImporter;
use crate::normalize;

/// Arguments for the normalize command
#[derive(Debug, Clone)]
pub struct NormalizeArgs {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub force: bool,
}

/// Run the full pipeline: load, normalize, render all outputs, and publish
/// the output directory atomically. A failed run never leaves a partially
/// written output directory behind - everything is rendered into a staging
/// sibling first and renamed into place as the final step.
pub fn handle_normalize(args: &NormalizeArgs) -> Result<(), CliError> {
    let records = CsvImporter::new().import_path(&args.input)?;
    let model = normalize::normalize(&records)?;

    let extracts = CsvExporter::new().export(&model)?;
    let script = SqlScriptExporter::new().export(&model)?;

    if args.output_dir.exists() && !args.force {
        return Err(CliError::OutputExists(args.output_dir.clone()));
    }

    let staging = staging_dir(&args.output_dir);
    if staging.exists() {
        fs::remove_dir_all(&staging)
            .map_err(|e| CliError::PublishError(staging.clone(), e.to_string()))?;
    }
    fs::create_dir_all(&staging)
        .map_err(|e| CliError::FileWriteError(staging.clone(), e.to_string()))?;

    for extract in &extracts {
        write_output(&staging.join(extract.file_name), &extract.result.content)?;
    }
    write_output(&staging.join(SCRIPT_FILE_NAME), &script.content)?;

    // Publish: replace any previous run in one rename
    if args.output_dir.exists() {
        fs::remove_dir_all(&args.output_dir)
            .map_err(|e| CliError::PublishError(args.output_dir.clone(), e.to_string()))?;
    }
    fs::rename(&staging, &args.output_dir)
        .map_err(|e| CliError::PublishError(args.output_dir.clone(), e.to_string()))?;

    let attrition = model.attrition_count();
    println!(
        "✅ Wrote {} extracts and {} to {}",
        extracts.len(),
        SCRIPT_FILE_NAME,
        args.output_dir.display()
    );
    println!("   Departments: {}", model.departments.len());
    println!("   Job roles:   {}", model.job_roles.len());
    println!("   Employees:   {}", model.employees.len());
    println!(
        "   Attrition:   {} ({:.1}%)",
        attrition,
        attrition as f64 / model.employees.len() as f64 * 100.0
    );

    Ok(())
}

/// Staging directory rendered next to the final output directory so the
/// publishing rename stays on one filesystem.
fn staging_dir(output_dir: &Path) -> PathBuf {
    let mut name = output_dir
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".staging");
    output_dir.with_file_name(name)
}

fn write_output(path: &Path, content: &str) -> Result<(), CliError> {
    fs::write(path, content).map_err(|e| CliError::FileWriteError(path.to_path_buf(), e.to_string()))
}
