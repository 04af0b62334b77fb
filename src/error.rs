// src/error.rs
use std::fmt;

/// Custom error types for the cstep-greeks library
#[derive(Debug, Clone)]
pub enum GreeksError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid sweep configuration
    InvalidConfiguration { field: String, reason: String },

    /// Failure writing a comparison table
    OutputError { filename: String, reason: String },
}

impl fmt::Display for GreeksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GreeksError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            GreeksError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            GreeksError::OutputError { filename, reason } => {
                write!(f, "Unable to write output file '{}': {}", filename, reason)
            }
        }
    }
}

impl std::error::Error for GreeksError {}

/// Result type alias for cstep-greeks operations
pub type GreeksResult<T> = Result<T, GreeksError>;

/// Validation utilities
pub mod validation {
    use super::{GreeksError, GreeksResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> GreeksResult<()> {
        if value <= 0.0 {
            Err(GreeksError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> GreeksResult<()> {
        if value < 0.0 {
            Err(GreeksError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> GreeksResult<()> {
        if !value.is_finite() {
            Err(GreeksError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("s", 100.0).is_ok());
        assert!(validate_positive("s", 0.0).is_err());
        assert!(validate_positive("s", -1.0).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("sigma", 0.2).is_ok());
        assert!(validate_non_negative("sigma", 0.0).is_ok());
        assert!(validate_non_negative("sigma", -0.1).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("value", 1.0).is_ok());
        assert!(validate_finite("value", f64::NAN).is_err());
        assert!(validate_finite("value", f64::INFINITY).is_err());
        assert!(validate_finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = GreeksError::InvalidParameters {
            parameter: "s".to_string(),
            value: -100.0,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("s"));
        assert!(display.contains("-100"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_output_error_display() {
        let error = GreeksError::OutputError {
            filename: "sweep.csv".to_string(),
            reason: "permission denied".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sweep.csv"));
        assert!(display.contains("permission denied"));
    }
}
