//! Standard normal distribution functions.
//!
//! This module provides:
//! - [`NormalDistribution`]: the collaborator trait the pricing layer evaluates through
//! - [`StandardNormal`]: the default implementation, backed by `statrs`' `erfc`
//! - `norm_cdf` / `norm_pdf`: free-function shortcuts over [`StandardNormal`]
//!
//! The CDF is computed as Φ(x) = ½·erfc(−x/√2). `statrs` evaluates `erfc`
//! to double precision across the whole real line, including the tails
//! where `1 − erf` would cancel catastrophically.

use statrs::function::erf::erfc;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal CDF/PDF provider.
///
/// Pricing models are generic over this trait so that an alternative
/// implementation (a tabulated CDF, a recording stub in tests) can be
/// swapped in without touching any formula.
///
/// # Contract
/// - `cdf(x)` lies in `[0, 1]` and is non-decreasing in `x`
/// - `pdf(x)` is non-negative and symmetric about zero
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::{NormalDistribution, StandardNormal};
///
/// let n = StandardNormal;
/// assert!((n.cdf(1.0) - 0.8413447460685429).abs() < 1e-14);
/// assert!((n.pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
pub trait NormalDistribution: Send + Sync {
    /// Cumulative distribution function P(X <= x).
    fn cdf(&self, x: f64) -> f64;

    /// Probability density function φ(x).
    fn pdf(&self, x: f64) -> f64;
}

/// Standard normal distribution N(0, 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardNormal;

impl NormalDistribution for StandardNormal {
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        // Φ(x) = 0.5 * erfc(-x / sqrt(2))
        0.5 * erfc(-x / std::f64::consts::SQRT_2)
    }

    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        // φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
        FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
    }
}

/// Standard normal cumulative distribution function.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    StandardNormal.cdf(x)
}

/// Standard normal probability density function.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((norm_pdf(1.0) - 0.2419707245).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    StandardNormal.pdf(x)
}
