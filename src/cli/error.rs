//! CLI-specific error types

use std::path::PathBuf;

use thiserror::Error;

use crate::export::ExportError;
use crate::import::ImportError;
use crate::normalize::NormalizeError;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to write file {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Output directory exists: {0}. Use --force to overwrite.")]
    OutputExists(PathBuf),

    #[error("Failed to publish output directory {0}: {1}")]
    PublishError(PathBuf, String),

    #[error("Import error: {0}")]
    ImportError(#[from] ImportError),

    #[error("Normalization error: {0}")]
    NormalizeError(#[from] NormalizeError),

    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),
}
