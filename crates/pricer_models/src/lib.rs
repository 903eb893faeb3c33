//! # Pricer Models (L2: Business Logic)
//!
//! European vanilla options under Black-Scholes-Merton.
//!
//! This crate provides:
//! - The call/put selector (`instruments::OptionType`)
//! - The option contract with closed-form price and Greeks (`analytical`)
//!
//! ## Design Principles
//!
//! - **Enum-based option type** matched exhaustively in every formula
//! - **Pluggable normal distribution** through `pricer_core`'s `NormalDistribution`
//! - **Builder pattern** for ergonomic construction with market defaults
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_models::analytical::OptionContract;
//! use pricer_models::instruments::OptionType;
//!
//! let call = OptionContract::builder()
//!     .option_type(OptionType::Call)
//!     .spot(105.0)
//!     .build()
//!     .unwrap();
//!
//! let greeks = call.greeks().unwrap();
//! assert!(greeks.delta > 0.5);
//! assert!(greeks.gamma > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
