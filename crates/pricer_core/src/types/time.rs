//! Trading-day time convention for option expiries.
//!
//! Expiries are quoted in days and converted to a year fraction by dividing
//! by the number of trading days in a year. Every pricing formula consumes
//! the same year fraction, so the conversion lives here rather than in each
//! model.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{year_fraction, TRADING_DAYS_PER_YEAR};
//!
//! assert_eq!(TRADING_DAYS_PER_YEAR, 252.0);
//! assert!((year_fraction(30.0) - 0.119_047_619).abs() < 1e-9);
//! ```

/// Number of trading days in one year.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Converts a day count into a fraction of a trading year.
///
/// # Arguments
/// * `days` - Days to expiry (may be fractional)
///
/// # Returns
/// `days / 252`. Negative inputs are passed through; callers validate
/// the sign before pricing.
#[inline]
pub fn year_fraction(days: f64) -> f64 {
    days / TRADING_DAYS_PER_YEAR
}
