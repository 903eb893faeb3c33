//! # pricer_core: Mathematical Foundation for the Black-Scholes-Merton Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - The standard normal distribution collaborator (`math::distributions`)
//! - The trading-day year-fraction convention (`types::time`)
//! - Cross-layer error categories: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - statrs: Correctly rounded complementary error function
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::{NormalDistribution, StandardNormal};
//! use pricer_core::types::time::year_fraction;
//!
//! let n = StandardNormal;
//! assert!((n.cdf(0.0) - 0.5).abs() < 1e-15);
//!
//! // 126 trading days is half a year
//! assert_eq!(year_fraction(126.0), 0.5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
