//! Numerical primitives consumed by the pricing layer.
//!
//! - `distributions`: standard normal CDF/PDF behind the [`NormalDistribution`] trait
//!
//! [`NormalDistribution`]: distributions::NormalDistribution

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf, NormalDistribution, StandardNormal};
