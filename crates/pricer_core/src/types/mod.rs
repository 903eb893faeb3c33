//! Core time and error types.
//!
//! This module provides:
//! - `time`: Trading-day year-fraction convention used by every pricing formula
//! - `error`: Structured error categories shared across layers
//!
//! # Re-exports
//!
//! For convenience, commonly used items are re-exported at this module level:
//! - [`year_fraction`], [`TRADING_DAYS_PER_YEAR`] from `time`
//! - [`PricingError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use time::{year_fraction, TRADING_DAYS_PER_YEAR};
