//! Instrument definitions.
//!
//! - [`OptionType`]: call/put selector with market-code parsing

pub mod option_type;

pub use option_type::OptionType;
