//! Option type (call/put) definitions.
//!
//! `OptionType` is the selector every analytical formula matches on. It is
//! parsed from the single-letter codes used by market inputs (`C`, `P`) as
//! well as the spelled-out names.

use std::fmt;
use std::str::FromStr;

use crate::analytical::AnalyticalError;

/// Type of a European vanilla option.
///
/// # Variants
/// - `Call`: right to buy, payoff max(S - K, 0)
/// - `Put`: right to sell, payoff max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let call: OptionType = "C".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.payoff(110.0, 100.0), 10.0);
///
/// assert!("X".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    #[cfg_attr(feature = "serde", serde(alias = "C", alias = "c", alias = "Call"))]
    Call,
    /// Put option: max(K - S, 0)
    #[cfg_attr(feature = "serde", serde(alias = "P", alias = "p", alias = "Put"))]
    Put,
}

impl OptionType {
    /// Single-letter market code (`'C'` or `'P'`).
    #[inline]
    pub fn code(&self) -> char {
        match self {
            OptionType::Call => 'C',
            OptionType::Put => 'P',
        }
    }

    /// Exercise value at expiry for the given spot and strike.
    #[inline]
    pub fn payoff(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            _ => Err(AnalyticalError::InvalidOptionType {
                code: s.to_string(),
            }),
        }
    }
}

impl TryFrom<char> for OptionType {
    type Error = AnalyticalError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'C' | 'c' => Ok(OptionType::Call),
            'P' | 'p' => Ok(OptionType::Put),
            other => Err(AnalyticalError::InvalidOptionType {
                code: other.to_string(),
            }),
        }
    }
}
