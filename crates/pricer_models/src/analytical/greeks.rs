//! Aggregated price and sensitivities of a single contract.

use std::fmt;

/// Price and the five first/second-order sensitivities.
///
/// Units follow the market quoting conventions of [`OptionContract`]:
/// vega and rho per one percentage point, theta per trading day.
///
/// [`OptionContract`]: super::OptionContract
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Theoretical value
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ per 1% volatility move
    pub vega: f64,
    /// Time decay per trading day
    pub theta: f64,
    /// ∂V/∂r per 1% rate move
    pub rho: f64,
}

impl fmt::Display for Greeks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "price={:.6} delta={:.6} gamma={:.6} vega={:.6} theta={:.6} rho={:.6}",
            self.price, self.delta, self.gamma, self.vega, self.theta, self.rho
        )
    }
}
