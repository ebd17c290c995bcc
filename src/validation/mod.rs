//! Validation logic shared by the normalization pipeline.

pub mod input;

pub use input::{ValidationError, ValidationResult};
