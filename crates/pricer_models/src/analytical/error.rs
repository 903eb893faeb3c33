//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors raised while constructing or evaluating an
//!   analytical option contract

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidOptionType`: Option type code is neither call nor put, or was never set
/// - `DegenerateInputs`: σ√T is zero (zero volatility or time, or underflow), where d1 is undefined
/// - `InvalidParameter`: A contract field violates its constraint
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidOptionType { code: "X".to_string() };
/// assert!(format!("{}", err).contains("'X'"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Option type code not recognised.
    #[error("Invalid option type: '{code}' (expected C or P)")]
    InvalidOptionType {
        /// The rejected option type code
        code: String,
    },

    /// σ√T is zero, so d1 is undefined.
    #[error(
        "Degenerate inputs: σ = {volatility}, days to expiry = {days_to_expiry} \
         (d1 is undefined when σ√T is zero)"
    )]
    DegenerateInputs {
        /// Contract volatility
        volatility: f64,
        /// Contract days to expiry
        days_to_expiry: f64,
    },

    /// Contract parameter outside its valid range.
    #[error("Invalid parameter: {name} = {value} ({constraint})")]
    InvalidParameter {
        /// Field name
        name: &'static str,
        /// Rejected value
        value: f64,
        /// The violated constraint
        constraint: &'static str,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidOptionType { .. }
            | AnalyticalError::InvalidParameter { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            AnalyticalError::DegenerateInputs { .. } => {
                PricingError::DegenerateInputs(err.to_string())
            }
        }
    }
}
