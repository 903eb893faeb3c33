//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form Black-Scholes-Merton valuation:
//! - [`OptionContract`]: immutable contract evaluating d1/d2, price and Greeks
//! - [`Greeks`]: price plus Delta, Gamma, Vega, Theta, Rho in one value
//! - [`AnalyticalError`]: construction and evaluation failures
//!
//! ## Design Principles
//!
//! - **Immutable value type**: no cached or mutable derived state
//! - **Exhaustive call/put dispatch**: every formula matches on [`OptionType`]
//! - **Explicit degenerate policy**: zero volatility or zero time fails fast
//!
//! [`OptionType`]: crate::instruments::OptionType

pub mod black_scholes;
pub mod error;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{
    OptionContract, OptionContractBuilder, DEFAULT_DAYS_TO_EXPIRY, DEFAULT_DIVIDEND_YIELD,
    DEFAULT_RATE, DEFAULT_SPOT, DEFAULT_STRIKE, DEFAULT_VOLATILITY,
};
pub use error::AnalyticalError;
pub use greeks::Greeks;
