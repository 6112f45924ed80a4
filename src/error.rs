// src/error.rs
use crate::solvers::implied_vol::NonConvergence;
use chrono::NaiveDate;
use std::fmt;

/// Custom error types for the bsm-pricer library
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Expiry date not strictly after the valuation date
    InvalidDates {
        valuation: NaiveDate,
        expiry: NaiveDate,
    },

    /// Implied volatility search gave up
    NonConvergence {
        reason: NonConvergence,
        best_volatility: f64,
        residual: f64,
    },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameters {
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
            PricingError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            PricingError::InvalidDates { valuation, expiry } => {
                write!(
                    f,
                    "Expiry {} must be after valuation date {}",
                    expiry, valuation
                )
            }
            PricingError::NonConvergence {
                reason,
                best_volatility,
                residual,
            } => {
                write!(
                    f,
                    "Implied volatility did not converge ({}): best σ = {:.8}, residual = {:.3e}",
                    reason, best_volatility, residual
                )
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Result type alias for bsm-pricer operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> PricingResult<()> {
        // NaN fails the comparison, so reject it explicitly
        if value.is_nan() || value <= 0.0 {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> PricingResult<()> {
        if value.is_nan() || value < 0.0 {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidParameters {
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
        assert!(validate_positive("sigma", 0.2).is_ok());
        assert!(validate_positive("sigma", 0.0).is_err());
        assert!(validate_positive("sigma", -0.1).is_err());
        assert!(validate_positive("sigma", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("q", 0.0).is_ok());
        assert!(validate_non_negative("q", 0.03).is_ok());
        assert!(validate_non_negative("q", -0.01).is_err());
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
        let error = PricingError::InvalidParameters {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_non_convergence_display() {
        let error = PricingError::NonConvergence {
            reason: NonConvergence::IterationLimit,
            best_volatility: 0.25,
            residual: 1e-3,
        };

        let display = format!("{}", error);
        assert!(display.contains("did not converge"));
        assert!(display.contains("0.25"));
        assert!(display.contains("iteration"));
    }

    #[test]
    fn test_invalid_dates_display() {
        let valuation = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let expiry = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let display = format!("{}", PricingError::InvalidDates { valuation, expiry });
        assert!(display.contains("2024-01-01"));
        assert!(display.contains("2024-06-01"));
    }
}
