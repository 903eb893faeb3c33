//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Cross-layer error category for pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Model-specific errors (for example `AnalyticalError` in `pricer_models`)
/// convert into one of these categories when they cross into the service
/// layer.
///
/// # Variants
/// - `InvalidInput`: Invalid market data, contract parameters or option type
/// - `DegenerateInputs`: Inputs valid on their own but outside the domain of
///   the closed-form formulas (zero volatility, zero time to expiry)
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Inputs outside the closed-form domain
    #[error("Degenerate inputs: {0}")]
    DegenerateInputs(String),
}
