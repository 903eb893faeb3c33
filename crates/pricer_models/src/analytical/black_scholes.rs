//! Black-Scholes-Merton pricing of European vanilla options.
//!
//! This module provides [`OptionContract`], an immutable contract that
//! evaluates its own closed-form price and Greeks under lognormal dynamics
//! with a continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! With T = days / 252, D_q = e^(-qT) and D_r = e^(-rT):
//!
//! **Call Price**: C = S·D_q·N(d₁) - K·D_r·N(d₂)
//! **Put Price**: P = K·D_r·N(-d₂) - S·D_q·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate inputs
//!
//! d₁ divides by σ√T. When that product is zero (zero volatility, zero days,
//! or a positive volatility so small that σ√T underflows), every formula
//! that depends on d₁ returns
//! [`AnalyticalError::DegenerateInputs`] instead of propagating NaN or ∞.
//! [`OptionContract::intrinsic_value`] stays available for callers that want
//! the limiting payoff.

use pricer_core::math::distributions::{NormalDistribution, StandardNormal};
use pricer_core::types::time::{year_fraction, TRADING_DAYS_PER_YEAR};

use super::error::AnalyticalError;
use super::greeks::Greeks;
use crate::instruments::OptionType;

/// Default spot price used by [`OptionContractBuilder`].
pub const DEFAULT_SPOT: f64 = 100.0;
/// Default strike price used by [`OptionContractBuilder`].
pub const DEFAULT_STRIKE: f64 = 100.0;
/// Default annualised volatility used by [`OptionContractBuilder`].
pub const DEFAULT_VOLATILITY: f64 = 0.20;
/// Default risk-free rate used by [`OptionContractBuilder`].
pub const DEFAULT_RATE: f64 = 0.05;
/// Default dividend yield used by [`OptionContractBuilder`].
pub const DEFAULT_DIVIDEND_YIELD: f64 = 0.01;
/// Default days to expiry used by [`OptionContractBuilder`].
pub const DEFAULT_DAYS_TO_EXPIRY: f64 = 30.0;

/// Scaling of vega and rho to a one percentage point move.
const PER_PERCENT: f64 = 0.01;

/// European vanilla option priced under Black-Scholes-Merton.
///
/// The contract is immutable: every query re-derives the intermediate terms
/// it needs from the seven inputs, and nothing is cached.
///
/// # Type Parameters
/// * `D` - Standard normal CDF/PDF provider (defaults to [`StandardNormal`])
///
/// # Examples
/// ```
/// use pricer_models::analytical::OptionContract;
/// use pricer_models::instruments::OptionType;
///
/// let call = OptionContract::builder().option_type(OptionType::Call).build().unwrap();
/// let put = OptionContract::builder().option_type(OptionType::Put).build().unwrap();
///
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// let t = call.time_fraction();
/// let forward_gap = 100.0 * (-0.01 * t).exp() - 100.0 * (-0.05 * t).exp();
/// let parity = call.price().unwrap() - put.price().unwrap() - forward_gap;
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionContract<D = StandardNormal> {
    option_type: OptionType,
    spot: f64,
    strike: f64,
    volatility: f64,
    rate: f64,
    dividend_yield: f64,
    days_to_expiry: f64,
    distribution: D,
}

impl OptionContract<StandardNormal> {
    /// Creates a new contract evaluated with the standard normal distribution.
    ///
    /// # Arguments
    /// * `option_type` - Call or put
    /// * `spot` - Current price of the underlying (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `volatility` - Annualised volatility (must be non-negative)
    /// * `rate` - Annualised continuously-compounded risk-free rate
    /// * `dividend_yield` - Annualised continuous dividend yield
    /// * `days_to_expiry` - Days to expiry (must be non-negative)
    ///
    /// # Errors
    /// `AnalyticalError::InvalidParameter` naming the first violated constraint.
    /// Non-finite values are rejected for every field.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::OptionContract;
    /// use pricer_models::instruments::OptionType;
    ///
    /// assert!(OptionContract::new(OptionType::Call, 100.0, 100.0, 0.2, 0.05, 0.01, 30.0).is_ok());
    /// assert!(OptionContract::new(OptionType::Call, -1.0, 100.0, 0.2, 0.05, 0.01, 30.0).is_err());
    /// ```
    pub fn new(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        volatility: f64,
        rate: f64,
        dividend_yield: f64,
        days_to_expiry: f64,
    ) -> Result<Self, AnalyticalError> {
        require(spot, "spot", spot > 0.0, "must be positive")?;
        require(strike, "strike", strike > 0.0, "must be positive")?;
        require(
            volatility,
            "volatility",
            volatility >= 0.0,
            "must be non-negative",
        )?;
        require(rate, "rate", true, "must be finite")?;
        require(dividend_yield, "dividend_yield", true, "must be finite")?;
        require(
            days_to_expiry,
            "days_to_expiry",
            days_to_expiry >= 0.0,
            "must be non-negative",
        )?;

        Ok(Self {
            option_type,
            spot,
            strike,
            volatility,
            rate,
            dividend_yield,
            days_to_expiry,
            distribution: StandardNormal,
        })
    }

    /// Starts a builder pre-filled with the market defaults
    /// (S=100, K=100, σ=0.20, r=0.05, q=0.01, 30 days). The option type has
    /// no default and must be set before `build`.
    pub fn builder() -> OptionContractBuilder {
        OptionContractBuilder::default()
    }
}

impl<D: NormalDistribution> OptionContract<D> {
    /// Returns the same contract evaluated through another distribution.
    pub fn with_distribution<E: NormalDistribution>(self, distribution: E) -> OptionContract<E> {
        OptionContract {
            option_type: self.option_type,
            spot: self.spot,
            strike: self.strike,
            volatility: self.volatility,
            rate: self.rate,
            dividend_yield: self.dividend_yield,
            days_to_expiry: self.days_to_expiry,
            distribution,
        }
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the days to expiry.
    #[inline]
    pub fn days_to_expiry(&self) -> f64 {
        self.days_to_expiry
    }

    /// Time to expiry as a fraction of a 252-day trading year.
    #[inline]
    pub fn time_fraction(&self) -> f64 {
        year_fraction(self.days_to_expiry)
    }

    /// Whether d₁ is undefined for this contract, i.e. σ√T evaluates to zero.
    ///
    /// True for zero volatility, zero days, and volatilities small enough
    /// that the product underflows.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vol_sqrt_t() == 0.0
    }

    /// Exercise value if the option expired now: max(S - K, 0) or max(K - S, 0).
    ///
    /// Defined for every valid contract, including degenerate ones.
    #[inline]
    pub fn intrinsic_value(&self) -> f64 {
        self.option_type.payoff(self.spot, self.strike)
    }

    /// Computes d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T).
    ///
    /// # Errors
    /// `AnalyticalError::DegenerateInputs` when σ = 0 or T = 0.
    pub fn d1(&self) -> Result<f64, AnalyticalError> {
        self.ensure_non_degenerate()?;
        let t = self.time_fraction();
        let log_moneyness = (self.spot / self.strike).ln();
        let drift =
            (self.rate - self.dividend_yield + 0.5 * self.volatility * self.volatility) * t;
        Ok((log_moneyness + drift) / self.vol_sqrt_t())
    }

    /// Computes d₂ = d₁ - σ√T.
    ///
    /// # Errors
    /// `AnalyticalError::DegenerateInputs` when σ = 0 or T = 0.
    pub fn d2(&self) -> Result<f64, AnalyticalError> {
        Ok(self.d1()? - self.vol_sqrt_t())
    }

    /// N(d₁), used by the call formulas.
    pub fn call_cdf_d1(&self) -> Result<f64, AnalyticalError> {
        Ok(self.distribution.cdf(self.d1()?))
    }

    /// N(d₂), used by the call formulas.
    pub fn call_cdf_d2(&self) -> Result<f64, AnalyticalError> {
        Ok(self.distribution.cdf(self.d2()?))
    }

    /// N(-d₁), used by the put formulas.
    ///
    /// Evaluated directly rather than as 1 - N(d₁) so that small tail
    /// probabilities keep their relative precision.
    pub fn put_cdf_d1(&self) -> Result<f64, AnalyticalError> {
        Ok(self.distribution.cdf(-self.d1()?))
    }

    /// N(-d₂), used by the put formulas.
    pub fn put_cdf_d2(&self) -> Result<f64, AnalyticalError> {
        Ok(self.distribution.cdf(-self.d2()?))
    }

    /// Computes the theoretical option value.
    ///
    /// - Call: S·D_q·N(d₁) - K·D_r·N(d₂)
    /// - Put: K·D_r·N(-d₂) - S·D_q·N(-d₁)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::OptionContract;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let call = OptionContract::builder().option_type(OptionType::Call).build().unwrap();
    /// assert!((call.price().unwrap() - 2.9864).abs() < 1e-4);
    /// ```
    pub fn price(&self) -> Result<f64, AnalyticalError> {
        let spot_leg = self.spot * self.dividend_discount();
        let strike_leg = self.strike * self.rate_discount();
        match self.option_type {
            OptionType::Call => {
                Ok(spot_leg * self.call_cdf_d1()? - strike_leg * self.call_cdf_d2()?)
            }
            OptionType::Put => Ok(strike_leg * self.put_cdf_d2()? - spot_leg * self.put_cdf_d1()?),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call: D_q·N(d₁), in [0, D_q]
    /// - Put: D_q·(N(d₁) - 1), in [-D_q, 0]
    pub fn delta(&self) -> Result<f64, AnalyticalError> {
        let n_d1 = self.call_cdf_d1()?;
        match self.option_type {
            OptionType::Call => Ok(self.dividend_discount() * n_d1),
            OptionType::Put => Ok(self.dividend_discount() * (n_d1 - 1.0)),
        }
    }

    /// Computes Gamma (∂²V/∂S²) = D_q·φ(d₁) / (S·σ·√T).
    ///
    /// Identical for calls and puts; always non-negative.
    ///
    /// # Errors
    /// `AnalyticalError::DegenerateInputs` also when S·σ·√T underflows to zero.
    pub fn gamma(&self) -> Result<f64, AnalyticalError> {
        let pdf_d1 = self.distribution.pdf(self.d1()?);
        let scale = self.spot * self.vol_sqrt_t();
        if scale == 0.0 {
            return Err(self.degenerate_error());
        }
        Ok(self.dividend_discount() / scale * pdf_d1)
    }

    /// Computes Vega per one percentage point of volatility:
    /// S·D_q·√T·φ(d₁) / 100.
    ///
    /// Identical for calls and puts; always non-negative.
    pub fn vega(&self) -> Result<f64, AnalyticalError> {
        let pdf_d1 = self.distribution.pdf(self.d1()?);
        Ok(PER_PERCENT
            * self.spot
            * self.dividend_discount()
            * self.time_fraction().sqrt()
            * pdf_d1)
    }

    /// Computes Theta as value change per trading day (scaled by 1/252).
    ///
    /// - Call: -(S·σ·D_q·N(d₁))/(2√T) - r·K·D_r·N(d₂) + q·S·D_q·N(d₁)
    /// - Put: -(S·σ·D_q·N(d₁))/(2√T) + r·K·D_r·N(-d₂) - q·S·D_q·N(-d₁)
    ///
    /// The leading decay term is weighted by N(d₁) for both calls and puts.
    pub fn theta(&self) -> Result<f64, AnalyticalError> {
        let spot_leg = self.spot * self.dividend_discount();
        let strike_leg = self.strike * self.rate_discount();
        let decay = -(spot_leg * self.volatility * self.call_cdf_d1()?)
            / (2.0 * self.time_fraction().sqrt());

        let annual = match self.option_type {
            OptionType::Call => {
                decay - self.rate * strike_leg * self.call_cdf_d2()?
                    + self.dividend_yield * spot_leg * self.call_cdf_d1()?
            }
            OptionType::Put => {
                decay + self.rate * strike_leg * self.put_cdf_d2()?
                    - self.dividend_yield * spot_leg * self.put_cdf_d1()?
            }
        };
        Ok(annual / TRADING_DAYS_PER_YEAR)
    }

    /// Computes Rho per one percentage point of the risk-free rate.
    ///
    /// - Call: K·T·D_r·N(d₂) / 100
    /// - Put: -K·T·D_r·N(-d₂) / 100
    pub fn rho(&self) -> Result<f64, AnalyticalError> {
        let carry = self.strike * self.time_fraction() * self.rate_discount();
        match self.option_type {
            OptionType::Call => Ok(PER_PERCENT * carry * self.call_cdf_d2()?),
            OptionType::Put => Ok(-PER_PERCENT * carry * self.put_cdf_d2()?),
        }
    }

    /// Computes the price and all five Greeks.
    ///
    /// Each field equals the corresponding individual query.
    pub fn greeks(&self) -> Result<Greeks, AnalyticalError> {
        Ok(Greeks {
            price: self.price()?,
            delta: self.delta()?,
            gamma: self.gamma()?,
            vega: self.vega()?,
            theta: self.theta()?,
            rho: self.rho()?,
        })
    }

    #[inline]
    fn dividend_discount(&self) -> f64 {
        (-self.dividend_yield * self.time_fraction()).exp()
    }

    #[inline]
    fn rate_discount(&self) -> f64 {
        (-self.rate * self.time_fraction()).exp()
    }

    #[inline]
    fn vol_sqrt_t(&self) -> f64 {
        self.volatility * self.time_fraction().sqrt()
    }

    fn degenerate_error(&self) -> AnalyticalError {
        AnalyticalError::DegenerateInputs {
            volatility: self.volatility,
            days_to_expiry: self.days_to_expiry,
        }
    }

    fn ensure_non_degenerate(&self) -> Result<(), AnalyticalError> {
        if self.is_degenerate() {
            return Err(self.degenerate_error());
        }
        Ok(())
    }
}

fn require(
    value: f64,
    name: &'static str,
    holds: bool,
    constraint: &'static str,
) -> Result<(), AnalyticalError> {
    if !value.is_finite() {
        return Err(AnalyticalError::InvalidParameter {
            name,
            value,
            constraint: "must be finite",
        });
    }
    if !holds {
        return Err(AnalyticalError::InvalidParameter {
            name,
            value,
            constraint,
        });
    }
    Ok(())
}

/// Builder for [`OptionContract`] with market defaults.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{AnalyticalError, OptionContract};
///
/// let put = OptionContract::builder()
///     .option_code("P")
///     .spot(95.0)
///     .days_to_expiry(60.0)
///     .build()
///     .unwrap();
/// assert_eq!(put.strike(), 100.0);
///
/// // Unknown codes fail at build time, before any formula runs
/// let err = OptionContract::builder().option_code("X").build().unwrap_err();
/// assert!(matches!(err, AnalyticalError::InvalidOptionType { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct OptionContractBuilder {
    option_type: Result<OptionType, AnalyticalError>,
    spot: f64,
    strike: f64,
    volatility: f64,
    rate: f64,
    dividend_yield: f64,
    days_to_expiry: f64,
}

impl Default for OptionContractBuilder {
    fn default() -> Self {
        Self {
            option_type: Err(AnalyticalError::InvalidOptionType {
                code: "<unspecified>".to_string(),
            }),
            spot: DEFAULT_SPOT,
            strike: DEFAULT_STRIKE,
            volatility: DEFAULT_VOLATILITY,
            rate: DEFAULT_RATE,
            dividend_yield: DEFAULT_DIVIDEND_YIELD,
            days_to_expiry: DEFAULT_DAYS_TO_EXPIRY,
        }
    }
}

impl OptionContractBuilder {
    /// Sets the option type.
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Ok(option_type);
        self
    }

    /// Sets the option type from a market code (`C`, `P`, `call`, `put`).
    ///
    /// An unrecognised code is reported by `build`.
    pub fn option_code(mut self, code: &str) -> Self {
        self.option_type = code.parse();
        self
    }

    /// Sets the spot price.
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = spot;
        self
    }

    /// Sets the strike price.
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = strike;
        self
    }

    /// Sets the annualised volatility.
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Sets the risk-free rate.
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the dividend yield.
    pub fn dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Sets the days to expiry.
    pub fn days_to_expiry(mut self, days_to_expiry: f64) -> Self {
        self.days_to_expiry = days_to_expiry;
        self
    }

    /// Validates the inputs and builds the contract.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidOptionType` if the type is missing or unparseable
    /// - `AnalyticalError::InvalidParameter` for out-of-range numeric fields
    pub fn build(self) -> Result<OptionContract, AnalyticalError> {
        let option_type = self.option_type?;
        OptionContract::new(
            option_type,
            self.spot,
            self.strike,
            self.volatility,
            self.rate,
            self.dividend_yield,
            self.days_to_expiry,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_contract(option_type: OptionType) -> OptionContract {
        OptionContract::builder()
            .option_type(option_type)
            .build()
            .unwrap()
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_builder_defaults() {
        let c = default_contract(OptionType::Call);
        assert_eq!(c.option_type(), OptionType::Call);
        assert_eq!(c.spot(), 100.0);
        assert_eq!(c.strike(), 100.0);
        assert_eq!(c.volatility(), 0.20);
        assert_eq!(c.rate(), 0.05);
        assert_eq!(c.dividend_yield(), 0.01);
        assert_eq!(c.days_to_expiry(), 30.0);
    }

    #[test]
    fn test_builder_without_option_type_fails() {
        match OptionContract::builder().build() {
            Err(AnalyticalError::InvalidOptionType { code }) => {
                assert_eq!(code, "<unspecified>");
            }
            other => panic!("Expected InvalidOptionType, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_invalid_code_fails() {
        match OptionContract::builder().option_code("X").build() {
            Err(AnalyticalError::InvalidOptionType { code }) => assert_eq!(code, "X"),
            other => panic!("Expected InvalidOptionType, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_later_type_overrides_bad_code() {
        let c = OptionContract::builder()
            .option_code("X")
            .option_type(OptionType::Put)
            .build()
            .unwrap();
        assert_eq!(c.option_type(), OptionType::Put);
    }

    #[test]
    fn test_new_invalid_spot() {
        for spot in [0.0, -100.0] {
            match OptionContract::new(OptionType::Call, spot, 100.0, 0.2, 0.05, 0.01, 30.0) {
                Err(AnalyticalError::InvalidParameter { name, value, .. }) => {
                    assert_eq!(name, "spot");
                    assert_eq!(value, spot);
                }
                other => panic!("Expected InvalidParameter, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_new_invalid_strike() {
        let result = OptionContract::new(OptionType::Put, 100.0, 0.0, 0.2, 0.05, 0.01, 30.0);
        assert!(matches!(
            result,
            Err(AnalyticalError::InvalidParameter { name: "strike", .. })
        ));
    }

    #[test]
    fn test_new_negative_volatility() {
        let result = OptionContract::new(OptionType::Call, 100.0, 100.0, -0.2, 0.05, 0.01, 30.0);
        assert!(matches!(
            result,
            Err(AnalyticalError::InvalidParameter {
                name: "volatility",
                constraint: "must be non-negative",
                ..
            })
        ));
    }

    #[test]
    fn test_new_negative_days() {
        let result = OptionContract::new(OptionType::Call, 100.0, 100.0, 0.2, 0.05, 0.01, -1.0);
        assert!(matches!(
            result,
            Err(AnalyticalError::InvalidParameter {
                name: "days_to_expiry",
                ..
            })
        ));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        let result = OptionContract::new(OptionType::Call, 100.0, 100.0, 0.2, f64::NAN, 0.01, 30.0);
        assert!(matches!(
            result,
            Err(AnalyticalError::InvalidParameter {
                name: "rate",
                constraint: "must be finite",
                ..
            })
        ));

        let result =
            OptionContract::new(OptionType::Call, f64::INFINITY, 100.0, 0.2, 0.05, 0.01, 30.0);
        assert!(matches!(
            result,
            Err(AnalyticalError::InvalidParameter { name: "spot", .. })
        ));
    }

    #[test]
    fn test_negative_rates_are_valid() {
        let c = OptionContract::new(OptionType::Call, 100.0, 100.0, 0.2, -0.01, -0.02, 30.0);
        assert!(c.is_ok());
    }

    #[test]
    fn test_zero_volatility_and_days_construct() {
        assert!(OptionContract::new(OptionType::Call, 100.0, 100.0, 0.0, 0.05, 0.01, 30.0).is_ok());
        assert!(OptionContract::new(OptionType::Call, 100.0, 100.0, 0.2, 0.05, 0.01, 0.0).is_ok());
    }

    // ==========================================================
    // d1 / d2 Tests
    // ==========================================================

    #[test]
    fn test_time_fraction() {
        let c = default_contract(OptionType::Call);
        assert_relative_eq!(c.time_fraction(), 30.0 / 252.0, epsilon = 1e-15);
    }

    #[test]
    fn test_d1_d2_reference_values() {
        let c = default_contract(OptionType::Call);
        assert_relative_eq!(c.d1().unwrap(), 0.10350983390135313, epsilon = 1e-12);
        assert_relative_eq!(c.d2().unwrap(), 0.034503277967117704, epsilon = 1e-12);
    }

    #[test]
    fn test_d2_is_d1_minus_vol_sqrt_t() {
        let c = default_contract(OptionType::Put);
        let expected = c.d1().unwrap() - 0.2 * (30.0_f64 / 252.0).sqrt();
        assert_eq!(c.d2().unwrap(), expected);
    }

    #[test]
    fn test_d1_itm_positive() {
        let c = OptionContract::builder()
            .option_type(OptionType::Call)
            .spot(150.0)
            .build()
            .unwrap();
        assert!(c.d1().unwrap() > 1.0);
    }

    #[test]
    fn test_cdf_transforms() {
        let c = default_contract(OptionType::Call);
        let d1 = c.d1().unwrap();
        let d2 = c.d2().unwrap();
        assert_eq!(c.call_cdf_d1().unwrap(), StandardNormal.cdf(d1));
        assert_eq!(c.call_cdf_d2().unwrap(), StandardNormal.cdf(d2));
        assert_eq!(c.put_cdf_d1().unwrap(), StandardNormal.cdf(-d1));
        assert_eq!(c.put_cdf_d2().unwrap(), StandardNormal.cdf(-d2));
        assert_relative_eq!(
            c.call_cdf_d1().unwrap() + c.put_cdf_d1().unwrap(),
            1.0,
            epsilon = 1e-15
        );
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // S=100, K=100, σ=0.2, r=0.05, q=0.01, 30 days
        let c = default_contract(OptionType::Call);
        assert_relative_eq!(c.price().unwrap(), 2.986383871717173, epsilon = 1e-10);
    }

    #[test]
    fn test_put_price_reference_value() {
        let p = default_contract(OptionType::Put);
        assert_relative_eq!(p.price().unwrap(), 2.511890594170346, epsilon = 1e-10);
    }

    #[test]
    fn test_put_price_otm_reference_value() {
        // S=100, K=90, σ=0.35, r=0.03, q=0, 90 days
        let p = OptionContract::new(OptionType::Put, 100.0, 90.0, 0.35, 0.03, 0.0, 90.0).unwrap();
        assert_relative_eq!(p.price().unwrap(), 3.5694597107587533, epsilon = 1e-10);
    }

    #[test]
    fn test_put_call_parity_defaults() {
        let c = default_contract(OptionType::Call);
        let p = default_contract(OptionType::Put);
        let t = c.time_fraction();
        let forward_gap = 100.0 * (-0.01 * t).exp() - 100.0 * (-0.05 * t).exp();
        assert_relative_eq!(
            c.price().unwrap() - p.price().unwrap(),
            forward_gap,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_deep_otm_put_is_tiny_but_positive() {
        let p = OptionContract::builder()
            .option_type(OptionType::Put)
            .spot(150.0)
            .build()
            .unwrap();
        let price = p.price().unwrap();
        assert!(price > 0.0);
        assert!(price < 1e-8);
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_call_greeks_reference_values() {
        let c = default_contract(OptionType::Call);
        assert_relative_eq!(c.delta().unwrap(), 0.5405769003097513, epsilon = 1e-12);
        assert_relative_eq!(c.gamma().unwrap(), 0.05743493294485589, epsilon = 1e-12);
        assert_relative_eq!(c.vega().unwrap(), 0.13674984034489499, epsilon = 1e-12);
        assert_relative_eq!(c.theta().unwrap(), -0.07016029941668624, epsilon = 1e-12);
        assert_relative_eq!(c.rho().unwrap(), 0.06079917399911659, epsilon = 1e-12);
    }

    #[test]
    fn test_put_greeks_reference_values() {
        let p = default_contract(OptionType::Put);
        assert_relative_eq!(p.delta().unwrap(), -0.4582333318354392, epsilon = 1e-12);
        assert_relative_eq!(p.gamma().unwrap(), 0.05743493294485589, epsilon = 1e-12);
        assert_relative_eq!(p.vega().unwrap(), 0.13674984034489499, epsilon = 1e-12);
        assert_relative_eq!(p.theta().unwrap(), -0.05440031423929173, epsilon = 1e-12);
        assert_relative_eq!(p.rho().unwrap(), -0.05754193306870745, epsilon = 1e-12);
    }

    #[test]
    fn test_put_greeks_second_reference() {
        let p = OptionContract::new(OptionType::Put, 100.0, 90.0, 0.35, 0.03, 0.0, 90.0).unwrap();
        assert_relative_eq!(p.d1().unwrap(), 0.6595261970077815, epsilon = 1e-12);
        assert_relative_eq!(p.delta().unwrap(), -0.25477896466850547, epsilon = 1e-12);
        assert_relative_eq!(p.gamma().unwrap(), 0.01534501998744569, epsilon = 1e-12);
        assert_relative_eq!(p.vega().unwrap(), 0.1918127498430711, epsilon = 1e-12);
        assert_relative_eq!(p.theta().unwrap(), -0.08313873851773294, epsilon = 1e-12);
        assert_relative_eq!(p.rho().unwrap(), -0.10374055777717607, epsilon = 1e-12);
    }

    #[test]
    fn test_gamma_vega_type_independent() {
        let c = default_contract(OptionType::Call);
        let p = default_contract(OptionType::Put);
        assert_eq!(c.gamma().unwrap(), p.gamma().unwrap());
        assert_eq!(c.vega().unwrap(), p.vega().unwrap());
    }

    #[test]
    fn test_put_theta_decay_term_uses_call_cdf() {
        let p = default_contract(OptionType::Put);
        let t = p.time_fraction();
        let dq = (-0.01 * t).exp();
        let dr = (-0.05 * t).exp();
        let decay = -(100.0 * 0.2 * dq * p.call_cdf_d1().unwrap()) / (2.0 * t.sqrt());
        let expected = (decay + 0.05 * 100.0 * dr * p.put_cdf_d2().unwrap()
            - 0.01 * 100.0 * dq * p.put_cdf_d1().unwrap())
            / 252.0;
        assert_relative_eq!(p.theta().unwrap(), expected, epsilon = 1e-14);
    }

    #[test]
    fn test_greeks_matches_individual_queries() {
        for ty in [OptionType::Call, OptionType::Put] {
            let c = default_contract(ty);
            let g = c.greeks().unwrap();
            assert_eq!(g.price, c.price().unwrap());
            assert_eq!(g.delta, c.delta().unwrap());
            assert_eq!(g.gamma, c.gamma().unwrap());
            assert_eq!(g.vega, c.vega().unwrap());
            assert_eq!(g.theta, c.theta().unwrap());
            assert_eq!(g.rho, c.rho().unwrap());
        }
    }

    // ==========================================================
    // Greeks vs Finite Difference Tests
    // ==========================================================

    fn price_with(ty: OptionType, spot: f64, vol: f64, rate: f64) -> f64 {
        OptionContract::new(ty, spot, 100.0, vol, rate, 0.01, 30.0)
            .unwrap()
            .price()
            .unwrap()
    }

    #[test]
    fn test_delta_vs_finite_diff() {
        let h = 0.01;
        for ty in [OptionType::Call, OptionType::Put] {
            let fd = (price_with(ty, 100.0 + h, 0.2, 0.05) - price_with(ty, 100.0 - h, 0.2, 0.05))
                / (2.0 * h);
            assert_relative_eq!(default_contract(ty).delta().unwrap(), fd, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_gamma_vs_finite_diff() {
        let h = 0.01;
        let ty = OptionType::Call;
        let fd = (price_with(ty, 100.0 + h, 0.2, 0.05) - 2.0 * price_with(ty, 100.0, 0.2, 0.05)
            + price_with(ty, 100.0 - h, 0.2, 0.05))
            / (h * h);
        assert_relative_eq!(default_contract(ty).gamma().unwrap(), fd, epsilon = 1e-5);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let h = 1e-4;
        let ty = OptionType::Put;
        let fd = (price_with(ty, 100.0, 0.2 + h, 0.05) - price_with(ty, 100.0, 0.2 - h, 0.05))
            / (2.0 * h);
        // vega is quoted per vol point
        assert_relative_eq!(default_contract(ty).vega().unwrap(), fd / 100.0, epsilon = 1e-7);
    }

    #[test]
    fn test_rho_vs_finite_diff() {
        let h = 1e-5;
        for ty in [OptionType::Call, OptionType::Put] {
            let fd = (price_with(ty, 100.0, 0.2, 0.05 + h) - price_with(ty, 100.0, 0.2, 0.05 - h))
                / (2.0 * h);
            assert_relative_eq!(default_contract(ty).rho().unwrap(), fd / 100.0, epsilon = 1e-7);
        }
    }

    // ==========================================================
    // Degenerate Input Tests
    // ==========================================================

    fn assert_all_degenerate(c: &OptionContract) {
        let checks: [(&str, Result<f64, AnalyticalError>); 12] = [
            ("d1", c.d1()),
            ("d2", c.d2()),
            ("call_cdf_d1", c.call_cdf_d1()),
            ("call_cdf_d2", c.call_cdf_d2()),
            ("put_cdf_d1", c.put_cdf_d1()),
            ("put_cdf_d2", c.put_cdf_d2()),
            ("price", c.price()),
            ("delta", c.delta()),
            ("gamma", c.gamma()),
            ("vega", c.vega()),
            ("theta", c.theta()),
            ("rho", c.rho()),
        ];
        for (name, result) in checks {
            assert!(
                matches!(result, Err(AnalyticalError::DegenerateInputs { .. })),
                "{} returned {:?}",
                name,
                result
            );
        }
        assert!(matches!(
            c.greeks(),
            Err(AnalyticalError::DegenerateInputs { .. })
        ));
    }

    #[test]
    fn test_zero_days_is_degenerate() {
        for ty in [OptionType::Call, OptionType::Put] {
            let c = OptionContract::builder()
                .option_type(ty)
                .days_to_expiry(0.0)
                .build()
                .unwrap();
            assert!(c.is_degenerate());
            assert_all_degenerate(&c);
        }
    }

    #[test]
    fn test_zero_volatility_is_degenerate() {
        let c = OptionContract::builder()
            .option_type(OptionType::Put)
            .volatility(0.0)
            .build()
            .unwrap();
        assert!(c.is_degenerate());
        assert_all_degenerate(&c);
    }

    #[test]
    fn test_degenerate_error_carries_inputs() {
        let c = OptionContract::builder()
            .option_type(OptionType::Call)
            .days_to_expiry(0.0)
            .build()
            .unwrap();
        assert_eq!(
            c.price().unwrap_err(),
            AnalyticalError::DegenerateInputs {
                volatility: 0.2,
                days_to_expiry: 0.0,
            }
        );
    }

    #[test]
    fn test_underflowing_volatility_is_degenerate() {
        // σ√T rounds to zero although σ > 0
        for dividend_yield in [0.05, 0.01] {
            for ty in [OptionType::Call, OptionType::Put] {
                let c = OptionContract::new(ty, 100.0, 100.0, 5e-324, 0.05, dividend_yield, 30.0)
                    .unwrap();
                assert!(c.is_degenerate());
                assert_all_degenerate(&c);
            }
        }
    }

    #[test]
    fn test_tiny_volatility_above_underflow_stays_finite() {
        let c = OptionContract::new(OptionType::Call, 100.0, 100.0, 1e-300, 0.05, 0.01, 30.0)
            .unwrap();
        assert!(!c.is_degenerate());
        let g = c.greeks().unwrap();
        for value in [g.price, g.delta, g.gamma, g.vega, g.theta, g.rho] {
            assert!(value.is_finite());
        }
    }

    #[test]
    fn test_gamma_rejects_underflowing_scale() {
        // d1 is finite but S·σ·√T underflows
        let c = OptionContract::new(OptionType::Call, 5e-324, 100.0, 1e-10, 0.05, 0.01, 30.0)
            .unwrap();
        assert!(c.d1().unwrap().is_finite());
        assert!(matches!(
            c.gamma(),
            Err(AnalyticalError::DegenerateInputs { .. })
        ));
    }

    #[test]
    fn test_intrinsic_value_available_when_degenerate() {
        let call = OptionContract::new(OptionType::Call, 110.0, 100.0, 0.2, 0.05, 0.01, 0.0).unwrap();
        let put = OptionContract::new(OptionType::Put, 110.0, 100.0, 0.2, 0.05, 0.01, 0.0).unwrap();
        assert_eq!(call.intrinsic_value(), 10.0);
        assert_eq!(put.intrinsic_value(), 0.0);
    }

    // ==========================================================
    // Distribution Injection Tests
    // ==========================================================

    #[derive(Debug, Clone, Copy)]
    struct ConstantNormal(f64);

    impl NormalDistribution for ConstantNormal {
        fn cdf(&self, _x: f64) -> f64 {
            self.0
        }

        fn pdf(&self, _x: f64) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_with_distribution_routes_every_cdf() {
        let c = default_contract(OptionType::Call).with_distribution(ConstantNormal(0.5));
        assert_eq!(c.call_cdf_d1().unwrap(), 0.5);
        assert_eq!(c.put_cdf_d2().unwrap(), 0.5);
        assert_eq!(c.gamma().unwrap(), 0.0);
        assert_eq!(c.vega().unwrap(), 0.0);
        assert_eq!(c.spot(), 100.0);
    }
}
