//! Domain-range validation for source values.
//!
//! The generated schema carries CHECK constraints for every ordinal column;
//! these functions enforce the same domains during projection so that an
//! out-of-range source value is rejected up front instead of being emitted
//! as SQL that a live database would refuse.

use thiserror::Error;

/// Valid employee age range.
pub const AGE_RANGE: (i64, i64) = (18, 100);
/// Valid education level range.
pub const EDUCATION_RANGE: (i64, i64) = (1, 5);
/// Valid job level range.
pub const JOB_LEVEL_RANGE: (i64, i64) = (1, 5);
/// Valid stock option level range.
pub const STOCK_OPTION_RANGE: (i64, i64) = (0, 3);
/// Valid range for every satisfaction, involvement, and performance score.
pub const SCORE_RANGE: (i64, i64) = (1, 4);

/// Errors that can occur during source value validation. Row numbers are
/// 1-based positions in the source table.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("{column} out of range at source row {row}: got {value}, allowed {min}..={max}")]
    OutOfRange {
        row: usize,
        column: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{column} at source row {row} must be 0 or 1, got {value}")]
    InvalidFlag {
        row: usize,
        column: &'static str,
        value: i64,
    },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check that a value falls inside an inclusive `(min, max)` domain.
pub fn check_range(
    row: usize,
    column: &'static str,
    value: i64,
    (min, max): (i64, i64),
) -> ValidationResult<()> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            row,
            column,
            value,
            min,
            max,
        });
    }
    Ok(())
}
