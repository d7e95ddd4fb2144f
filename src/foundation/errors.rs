//! Error types for the CODA model.

use thiserror::Error;

/// Errors raised by model construction and mutation.
///
/// All validation happens eagerly at the point of mutation; derived
/// computations (merit, satisfaction) assume their inputs are already
/// valid and never raise.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodaError {
    #[error("'{field}' must satisfy {min} <= x <= {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("value of characteristic '{name}' has not been set")]
    UnsetValue { name: String },

    #[error(
        "correlation must be one of 0/'none', 1/0.1/'weak', 3/0.3/'moderate'/'medium', \
         9/0.9/'strong', got {input}"
    )]
    InvalidCorrelation { input: String },

    #[error("null relationships have a fixed {attribute}")]
    ImmutableRelationship { attribute: &'static str },

    #[error("requirement weights must sum to at most 1.0; adding '{name}' brings the total to {total}")]
    WeightBudgetExceeded { name: String, total: f64 },

    #[error("no {axis} matching '{reference}'")]
    Lookup {
        axis: &'static str,
        reference: String,
    },

    #[error("{0}")]
    InvalidArgument(String),
}

impl CodaError {
    /// Creates an out-of-range error; absent bounds render as infinities.
    pub fn out_of_range(
        field: impl Into<String>,
        min: Option<f64>,
        max: Option<f64>,
        actual: f64,
    ) -> Self {
        CodaError::OutOfRange {
            field: field.into(),
            min: min.unwrap_or(f64::NEG_INFINITY),
            max: max.unwrap_or(f64::INFINITY),
            actual,
        }
    }

    /// Creates an unset-value error for the named characteristic.
    pub fn unset_value(name: impl Into<String>) -> Self {
        CodaError::UnsetValue { name: name.into() }
    }

    /// Creates an invalid-correlation error from the offending input.
    pub fn invalid_correlation(input: impl Into<String>) -> Self {
        CodaError::InvalidCorrelation {
            input: input.into(),
        }
    }

    /// Creates a lookup error for the given axis and unresolved reference.
    pub fn lookup(axis: &'static str, reference: impl Into<String>) -> Self {
        CodaError::Lookup {
            axis,
            reference: reference.into(),
        }
    }

    /// Creates an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CodaError::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_displays_bounds() {
        let err = CodaError::out_of_range("weight", Some(0.0), Some(1.0), 1.5);
        assert_eq!(format!("{}", err), "'weight' must satisfy 0 <= x <= 1, got 1.5");
    }

    #[test]
    fn out_of_range_renders_absent_bounds_as_infinities() {
        let err = CodaError::out_of_range("mass", None, Some(10.0), 12.0);
        assert_eq!(
            format!("{}", err),
            "'mass' must satisfy -inf <= x <= 10, got 12"
        );
    }

    #[test]
    fn unset_value_names_the_characteristic() {
        let err = CodaError::unset_value("Mass");
        assert_eq!(
            format!("{}", err),
            "value of characteristic 'Mass' has not been set"
        );
    }

    #[test]
    fn lookup_names_axis_and_reference() {
        let err = CodaError::lookup("requirement", "Stiffness");
        assert_eq!(format!("{}", err), "no requirement matching 'Stiffness'");
    }

    #[test]
    fn invalid_correlation_names_the_valid_set() {
        let err = CodaError::invalid_correlation("0.25");
        let text = format!("{}", err);
        assert!(text.contains("'weak'"));
        assert!(text.contains("'strong'"));
        assert!(text.contains("0.25"));
    }
}
