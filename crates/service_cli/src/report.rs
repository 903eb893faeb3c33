//! Contract records and pricing reports
//!
//! A [`ContractRecord`] is the loosely-typed input shape shared by the
//! `price` flags and the `batch` JSON file: the option code is kept as text
//! and numeric fields are optional, so that validation happens in the pricer
//! and failures are reported per contract.

use pricer_models::analytical::{AnalyticalError, Greeks, OptionContract};
use serde::{Deserialize, Serialize};

use crate::config::MarketDefaults;
use crate::Result;

/// One contract as supplied by the user
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ContractRecord {
    /// Option code (`C`, `P`, `call`, `put`)
    pub option_type: String,
    /// Spot price
    pub spot: Option<f64>,
    /// Strike price
    pub strike: Option<f64>,
    /// Annualised volatility
    pub volatility: Option<f64>,
    /// Risk-free rate
    pub rate: Option<f64>,
    /// Dividend yield
    pub dividend_yield: Option<f64>,
    /// Days to expiry
    pub days_to_expiry: Option<f64>,
}

impl ContractRecord {
    /// Builds the contract, filling omitted fields from `defaults`.
    pub fn to_contract(
        &self,
        defaults: &MarketDefaults,
    ) -> std::result::Result<OptionContract, AnalyticalError> {
        OptionContract::builder()
            .option_code(&self.option_type)
            .spot(self.spot.unwrap_or(defaults.spot))
            .strike(self.strike.unwrap_or(defaults.strike))
            .volatility(self.volatility.unwrap_or(defaults.volatility))
            .rate(self.rate.unwrap_or(defaults.rate))
            .dividend_yield(self.dividend_yield.unwrap_or(defaults.dividend_yield))
            .days_to_expiry(self.days_to_expiry.unwrap_or(defaults.days_to_expiry))
            .build()
    }
}

/// Priced contract, or the reason it could not be priced
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PricingReport {
    /// Option code as supplied
    pub option_type: String,
    /// Resolved spot price
    pub spot: f64,
    /// Resolved strike price
    pub strike: f64,
    /// Resolved volatility
    pub volatility: f64,
    /// Resolved risk-free rate
    pub rate: f64,
    /// Resolved dividend yield
    pub dividend_yield: f64,
    /// Resolved days to expiry
    pub days_to_expiry: f64,
    /// Exercise value now, when the contract is valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intrinsic_value: Option<f64>,
    /// Price and sensitivities, when they are defined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeks: Option<Greeks>,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PricingReport {
    /// Prices `record`; never fails, errors are captured in the report.
    pub fn evaluate(record: &ContractRecord, defaults: &MarketDefaults) -> Self {
        match record.to_contract(defaults) {
            Ok(contract) => match contract.greeks() {
                Ok(greeks) => Self::priced(&contract, greeks),
                Err(e) => Self {
                    error: Some(e.to_string()),
                    ..Self::resolved(&contract)
                },
            },
            Err(e) => Self {
                option_type: record.option_type.clone(),
                spot: record.spot.unwrap_or(defaults.spot),
                strike: record.strike.unwrap_or(defaults.strike),
                volatility: record.volatility.unwrap_or(defaults.volatility),
                rate: record.rate.unwrap_or(defaults.rate),
                dividend_yield: record.dividend_yield.unwrap_or(defaults.dividend_yield),
                days_to_expiry: record.days_to_expiry.unwrap_or(defaults.days_to_expiry),
                intrinsic_value: None,
                greeks: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// Report for a contract whose Greeks were already computed.
    pub fn priced(contract: &OptionContract, greeks: Greeks) -> Self {
        Self {
            greeks: Some(greeks),
            ..Self::resolved(contract)
        }
    }

    fn resolved(contract: &OptionContract) -> Self {
        Self {
            option_type: contract.option_type().to_string(),
            spot: contract.spot(),
            strike: contract.strike(),
            volatility: contract.volatility(),
            rate: contract.rate(),
            dividend_yield: contract.dividend_yield(),
            days_to_expiry: contract.days_to_expiry(),
            intrinsic_value: Some(contract.intrinsic_value()),
            greeks: None,
            error: None,
        }
    }

    /// Whether the contract was priced.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Renders reports as a box-drawn table.
pub fn render_table(reports: &[PricingReport]) -> String {
    let mut out = String::new();
    out.push_str("┌──────┬──────────┬──────────┬────────────┬────────────┬────────────┬────────────┬────────────┬────────────┐\n");
    out.push_str("│ Type │ Spot     │ Strike   │ Price      │ Delta      │ Gamma      │ Vega       │ Theta      │ Rho        │\n");
    out.push_str("├──────┼──────────┼──────────┼────────────┼────────────┼────────────┼────────────┼────────────┼────────────┤\n");
    for r in reports {
        let kind = r.option_type.chars().take(4).collect::<String>();
        match (&r.greeks, &r.error) {
            (Some(g), _) => out.push_str(&format!(
                "│ {:<4} │ {:>8.2} │ {:>8.2} │ {:>10.6} │ {:>10.6} │ {:>10.6} │ {:>10.6} │ {:>10.6} │ {:>10.6} │\n",
                kind, r.spot, r.strike, g.price, g.delta, g.gamma, g.vega, g.theta, g.rho
            )),
            (None, error) => out.push_str(&format!(
                "│ {:<4} │ {:>8.2} │ {:>8.2} │ {:<75} │\n",
                kind,
                r.spot,
                r.strike,
                truncate(error.as_deref().unwrap_or("not priced"), 75)
            )),
        }
    }
    out.push_str("└──────┴──────────┴──────────┴────────────┴────────────┴────────────┴────────────┴────────────┴────────────┘\n");
    out
}

/// Renders reports as pretty-printed JSON (an array).
pub fn render_json(reports: &[PricingReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}
