//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Raised when a progress or health computation receives NaN or infinity.
///
/// Zero and negative finite values never produce this error; they are
/// handled by the calculator's policies.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Metric input '{field}' must be a finite number, got {value}")]
pub struct InvalidMetricError {
    pub field: &'static str,
    pub value: f64,
}

impl InvalidMetricError {
    /// Returns `value` unchanged when finite, otherwise an error naming `field`.
    pub fn check(field: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self { field, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("task_id");
        assert_eq!(format!("{}", err), "Field 'task_id' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("week", 1, 53, 60);
        assert_eq!(
            format!("{}", err),
            "Field 'week' must be between 1 and 53, got 60"
        );
    }

    #[test]
    fn invalid_metric_check_passes_finite_values_through() {
        assert_eq!(InvalidMetricError::check("current", 0.0), Ok(0.0));
        assert_eq!(InvalidMetricError::check("current", -4.5), Ok(-4.5));
    }

    #[test]
    fn invalid_metric_check_rejects_nan_and_infinity() {
        let err = InvalidMetricError::check("target", f64::INFINITY).unwrap_err();
        assert_eq!(err.field, "target");

        let err = InvalidMetricError::check("current", f64::NAN).unwrap_err();
        assert_eq!(err.field, "current");
        assert!(err.value.is_nan());
    }

    #[test]
    fn invalid_metric_error_displays_field() {
        let err = InvalidMetricError {
            field: "target",
            value: f64::NEG_INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "Metric input 'target' must be a finite number, got -inf"
        );
    }
}
